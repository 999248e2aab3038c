use crate::constants::{
    MAX_NUMERIC_TAIL_TICKER_LENGTH, MAX_VALID_TICKER_LENGTH, TICKER_PUNCTUATION,
};

/// Basic format check for an already cleaned ticker.
///
/// A valid ticker is non-empty, made only of `A-Z`, `0-9`, `.` and `-`,
/// starts with a letter, and is at most `MAX_VALID_TICKER_LENGTH` long.
/// Tickers longer than five characters whose tail is entirely digits are
/// rejected as well.
pub fn validate_ticker(ticker: &str) -> bool {
    let Some(first) = ticker.chars().next() else {
        return false;
    };

    if !ticker
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || TICKER_PUNCTUATION.contains(&c))
    {
        return false;
    }

    if !first.is_ascii_uppercase() {
        return false;
    }

    if ticker.len() > MAX_VALID_TICKER_LENGTH {
        return false;
    }

    let tail = &ticker[1..];
    if ticker.len() > MAX_NUMERIC_TAIL_TICKER_LENGTH && tail.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    true
}
