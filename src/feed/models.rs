use serde::{Deserialize, Serialize};

/// One round as returned by the upstream Sunwin feed.
///
/// `phien` advances with every round and is the dedup key. Dice and sum
/// are optional metadata; feeds that omit them yield zeros.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundData {
    pub phien: u64,
    pub ket_qua: String,
    #[serde(default)]
    pub xuc_xac_1: u8,
    #[serde(default)]
    pub xuc_xac_2: u8,
    #[serde(default)]
    pub xuc_xac_3: u8,
    #[serde(default)]
    pub tong: u8,
}

impl RoundData {
    pub fn dice(&self) -> [u8; 3] {
        [self.xuc_xac_1, self.xuc_xac_2, self.xuc_xac_3]
    }
}
