pub mod catalog;
pub mod history;
pub mod predictor;

pub use catalog::{Outcome, PatternEntry, SUNWIN_PATTERNS};
pub use history::{append, MAX_HISTORY_LEN};
pub use predictor::{evaluate, Prediction, MIN_HISTORY_LEN, PENDING_LABEL};
