use super::catalog::Outcome;

/// Maximum number of rounds kept in the rolling history.
pub const MAX_HISTORY_LEN: usize = 100;

/// Append an outcome to the history string, trimming from the front when the
/// cap is exceeded. Oldest rounds go first; the tail is always the latest.
pub fn append(history: &mut String, outcome: Outcome) {
    history.push(outcome.as_char());

    if history.len() > MAX_HISTORY_LEN {
        let excess = history.len() - MAX_HISTORY_LEN;
        history.drain(..excess);
    }
}
