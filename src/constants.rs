/// Number of suggestions shown by the interactive search front ends.
pub const DEFAULT_MAX_RESULTS: usize = 8;

/// Cleaned tickers are truncated to this many characters.
pub const MAX_CLEANED_TICKER_LENGTH: usize = 10;

/// Longest ticker `validate_ticker` accepts.
pub const MAX_VALID_TICKER_LENGTH: usize = 8;

/// A ticker longer than this whose tail is all digits is rejected.
pub const MAX_NUMERIC_TAIL_TICKER_LENGTH: usize = 5;

/// Characters allowed in a ticker besides ASCII uppercase letters and digits.
pub const TICKER_PUNCTUATION: &[char] = &['.', '-'];

pub const TICKER_CSV_HEADER: &str = "ticker";
pub const COMPANY_NAME_CSV_HEADER: &str = "company_name";
