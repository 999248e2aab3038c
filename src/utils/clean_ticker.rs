use crate::constants::{MAX_CLEANED_TICKER_LENGTH, TICKER_PUNCTUATION};

/// Cleans free-form user input into ticker form.
///
/// Whitespace is removed, letters are uppercased, and anything other than
/// `A-Z`, `0-9`, `.` and `-` is dropped. Leading and trailing punctuation is
/// stripped. Input that would start with a digit cleans to an empty string.
/// The result is capped at `MAX_CLEANED_TICKER_LENGTH` characters.
///
/// ```rust
/// use stock_search::clean_ticker;
///
/// assert_eq!(clean_ticker(" brk .b "), "BRK.B");
/// assert_eq!(clean_ticker("$tsla!"), "TSLA");
/// assert_eq!(clean_ticker("3M"), "");
/// ```
pub fn clean_ticker(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || TICKER_PUNCTUATION.contains(c))
        .collect();

    let cleaned = cleaned.trim_matches(TICKER_PUNCTUATION);

    if cleaned.starts_with(|c: char| c.is_ascii_digit()) {
        return String::new();
    }

    // Every remaining character is ASCII, so this is a char boundary
    cleaned[..cleaned.len().min(MAX_CLEANED_TICKER_LENGTH)].to_string()
}
