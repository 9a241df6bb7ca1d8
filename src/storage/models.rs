use crate::engine;
use crate::feed::RoundData;
use serde::{Deserialize, Serialize};

/// The whole process state: one session, one history, one prediction.
///
/// Field names are the snapshot's (and the public API's) wire names, so
/// the struct serializes straight into the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub phien_hien_tai: u64,
    pub chuoi_cau: String,
    pub du_doan: String,
    pub do_tin_cay: String,
    // Last-round metadata
    #[serde(default)]
    pub xuc_xac: [u8; 3],
    #[serde(default)]
    pub tong: u8,
    #[serde(default)]
    pub ket_qua: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phien_hien_tai: 0,
            chuoi_cau: String::new(),
            du_doan: engine::PENDING_LABEL.to_string(),
            do_tin_cay: "0%".to_string(),
            xuc_xac: [0, 0, 0],
            tong: 0,
            ket_qua: String::new(),
        }
    }
}

impl SessionState {
    /// Whether this round was already processed. The feed repeats the
    /// latest round until a new one settles, so equal session ids mean
    /// "nothing new".
    pub fn is_duplicate(&self, round: &RoundData) -> bool {
        round.phien == self.phien_hien_tai
    }

    /// Fold a new round into the state: session id and round metadata,
    /// history append, then a fresh engine evaluation. One atomic
    /// in-memory update; the caller persists afterwards.
    pub fn apply_round(&mut self, round: &RoundData) {
        self.phien_hien_tai = round.phien;
        self.xuc_xac = round.dice();
        self.tong = round.tong;
        self.ket_qua = round.ket_qua.clone();

        let outcome = engine::Outcome::from_label(&round.ket_qua);
        engine::append(&mut self.chuoi_cau, outcome);

        let prediction = engine::evaluate(&self.chuoi_cau);
        self.du_doan = prediction.du_doan;
        self.do_tin_cay = prediction.do_tin_cay;
    }
}
