use crate::models::StockRecord;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`.
pub type TickerSymbol = String;

/// Represents the name of a company as an owned `String`.
pub type CompanyName = String;

/// The searchable corpus: an ordered list of `StockRecord`s, owned by the caller.
///
/// Order matters. Within a match tier, results follow the order of this list.
pub type StockRecordList = Vec<StockRecord>;

/// Maximum number of results a single search may return.
pub type MaxResults = usize;
