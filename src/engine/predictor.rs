use super::catalog::{Outcome, PatternEntry, SUNWIN_PATTERNS};

/// Histories shorter than this never produce a prediction. Fixed constant,
/// independent of the longest catalog sequence (a 4..6 long history can
/// match short patterns but never the 7-long ones).
pub const MIN_HISTORY_LEN: usize = 4;

/// Label published while there is no usable signal.
pub const PENDING_LABEL: &str = "Chờ cầu";

/// Result of one engine evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub du_doan: String,
    pub do_tin_cay: String,
}

impl Prediction {
    fn pending() -> Self {
        Self {
            du_doan: PENDING_LABEL.to_string(),
            do_tin_cay: "0%".to_string(),
        }
    }
}

/// Run the pattern engine over the current history string.
///
/// Every catalog entry is tested for suffix equality against the history
/// tail; among the matches the longest sequence wins, ties resolving to
/// catalog order. The prediction is the contrarian flip of the matched
/// sequence's last symbol, confidence `round(probability * strength * 100)`.
pub fn evaluate(history: &str) -> Prediction {
    if history.len() < MIN_HISTORY_LEN {
        return Prediction::pending();
    }

    let mut best: Option<&PatternEntry> = None;

    for entry in SUNWIN_PATTERNS {
        if !matches_suffix(history, entry.sequence) {
            continue;
        }
        match best {
            Some(current) if entry.sequence.len() <= current.sequence.len() => {}
            _ => best = Some(entry),
        }
    }

    let Some(entry) = best else {
        return Prediction::pending();
    };

    // sequence length >= 3 per catalog contract
    let last = entry.sequence[entry.sequence.len() - 1];
    let percent = (entry.probability * entry.strength * 100.0).round() as u32;

    Prediction {
        du_doan: last.flipped().as_label().to_string(),
        do_tin_cay: format!("{}%", percent),
    }
}

/// Suffix equality against the history string. The history is ASCII by
/// construction (only 'T' and 'X'); comparing bytes keeps this total even
/// for a malformed snapshot.
fn matches_suffix(history: &str, sequence: &[Outcome]) -> bool {
    let bytes = history.as_bytes();
    let len = sequence.len();
    if bytes.len() < len {
        return false;
    }
    bytes[bytes.len() - len..]
        .iter()
        .zip(sequence.iter())
        .all(|(b, outcome)| *b == outcome.as_char() as u8)
}
