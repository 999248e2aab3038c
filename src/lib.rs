pub mod constants;
pub use constants::DEFAULT_MAX_RESULTS;
pub mod models;
pub use models::{
    Error, MatchKind, MatchResult, MergeReport, StockRecord, StockRecordListPreprocessor,
    TickerSearchRanker,
};
pub mod types;
mod utils;
pub use types::{CompanyName, MaxResults, StockRecordList, TickerSymbol};
pub use utils::{clean_ticker, dedup_stock_records, merge_stock_records, validate_ticker};

#[cfg(feature = "embed-bytes")]
const COMPRESSED_STOCK_DATA: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/stock_data.csv.gz"));

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Searches `stock_records` for `query`, returning at most `max_results`
/// ranked matches.
///
/// Matches are grouped by `MatchKind` tier (exact ticker, exact company word,
/// ticker prefix, company substring, ticker substring). Each ticker appears
/// once. An empty query or a zero `max_results` yields no results.
///
/// Callers that search repeatedly over the same list should build a
/// `TickerSearchRanker` once instead.
pub fn search_stocks(
    query: &str,
    stock_records: &[StockRecord],
    max_results: MaxResults,
) -> Vec<MatchResult> {
    TickerSearchRanker::new(stock_records).search(query, max_results)
}

/// Decodes the default stock record list bundled with the crate.
#[cfg(feature = "embed-bytes")]
pub fn load_embedded_stock_record_list() -> Result<StockRecordList, Error> {
    StockRecordListPreprocessor::extract_stock_record_list_from_bytes(COMPRESSED_STOCK_DATA)
}
