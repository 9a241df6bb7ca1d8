/// Binary round outcome: Tài (high) or Xỉu (low).
/// Encoded as a single letter in the history string and the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Tai,
    Xiu,
}

impl Outcome {
    /// Map the upstream result label. Anything that is not "Tài" counts as Xỉu.
    pub fn from_label(label: &str) -> Self {
        if label == "Tài" {
            Outcome::Tai
        } else {
            Outcome::Xiu
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Outcome::Tai => 'T',
            Outcome::Xiu => 'X',
        }
    }

    /// Prediction label for this outcome.
    pub fn as_label(&self) -> &'static str {
        match self {
            Outcome::Tai => "Tài",
            Outcome::Xiu => "Xỉu",
        }
    }

    /// The contrarian flip: a streak ending in Tài predicts Xỉu and vice versa.
    pub fn flipped(&self) -> Self {
        match self {
            Outcome::Tai => Outcome::Xiu,
            Outcome::Xiu => Outcome::Tai,
        }
    }
}

/// One streak shape the engine recognizes at the tail of the history.
///
/// `probability` and `strength` are static weights; their product gives
/// the published confidence. The label groups related shapes and has no
/// effect on matching.
#[derive(Debug, Clone, Copy)]
pub struct PatternEntry {
    pub label: &'static str,
    pub sequence: &'static [Outcome],
    pub probability: f64,
    pub strength: f64,
}

use Outcome::{Tai, Xiu};

/// Fixed Sunwin pattern catalog. Iteration order matters: ties between
/// equal-length matches resolve to the first entry.
pub static SUNWIN_PATTERNS: &[PatternEntry] = &[
    // Bệt (runs of the same side)
    PatternEntry {
        label: "bệt-3",
        sequence: &[Tai, Tai, Tai],
        probability: 0.75,
        strength: 0.90,
    },
    PatternEntry {
        label: "bệt-3",
        sequence: &[Xiu, Xiu, Xiu],
        probability: 0.75,
        strength: 0.90,
    },
    PatternEntry {
        label: "bệt-4",
        sequence: &[Tai, Tai, Tai, Tai],
        probability: 0.78,
        strength: 0.92,
    },
    PatternEntry {
        label: "bệt-4",
        sequence: &[Xiu, Xiu, Xiu, Xiu],
        probability: 0.78,
        strength: 0.92,
    },
    // Cầu 1-1 (alternating)
    PatternEntry {
        label: "1-1",
        sequence: &[Tai, Xiu, Tai, Xiu],
        probability: 0.72,
        strength: 0.85,
    },
    PatternEntry {
        label: "1-1",
        sequence: &[Xiu, Tai, Xiu, Tai],
        probability: 0.72,
        strength: 0.85,
    },
    // Cầu 2-2 (pairs)
    PatternEntry {
        label: "2-2",
        sequence: &[Tai, Tai, Xiu, Xiu],
        probability: 0.70,
        strength: 0.80,
    },
    PatternEntry {
        label: "2-2",
        sequence: &[Xiu, Xiu, Tai, Tai],
        probability: 0.70,
        strength: 0.80,
    },
    // Cầu 3-2
    PatternEntry {
        label: "3-2",
        sequence: &[Tai, Tai, Tai, Xiu, Xiu],
        probability: 0.68,
        strength: 0.78,
    },
    PatternEntry {
        label: "3-2",
        sequence: &[Xiu, Xiu, Xiu, Tai, Tai],
        probability: 0.68,
        strength: 0.78,
    },
    // Long alternation, strongest signal for 1-1 continuation
    PatternEntry {
        label: "1-1 dài",
        sequence: &[Tai, Xiu, Tai, Xiu, Tai, Xiu, Tai],
        probability: 0.74,
        strength: 0.88,
    },
    PatternEntry {
        label: "1-1 dài",
        sequence: &[Xiu, Tai, Xiu, Tai, Xiu, Tai, Xiu],
        probability: 0.74,
        strength: 0.88,
    },
];
