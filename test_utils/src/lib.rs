pub mod constants;

use csv::Reader;
use std::collections::HashSet;
use std::error::Error;
use std::path::Path;
use stock_search::{MatchResult, StockRecord, StockRecordList};

/// Utility to load stock records from a CSV file for testing and benchmarking.
///
/// Unlike the library loader, this reads columns by position and keeps
/// duplicate rows, so tests can feed the ranker unfiltered data.
pub fn load_stock_records_from_file<P: AsRef<Path>>(
    file_path: P,
) -> Result<StockRecordList, Box<dyn Error>> {
    let mut stock_records = StockRecordList::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        match (record.get(0), record.get(1)) {
            (Some(ticker), Some(company_name)) if record.len() == 2 => {
                stock_records.push(StockRecord::new(ticker, company_name));
            }
            _ => eprintln!("Skipping invalid row: {:?}", record),
        }
    }

    Ok(stock_records)
}

/// Panics if any ticker appears more than once in `results`.
pub fn assert_no_duplicate_tickers(results: &[MatchResult]) {
    let mut seen = HashSet::new();
    for result in results {
        assert!(
            seen.insert(result.ticker.to_uppercase()),
            "Duplicate ticker found: {}",
            result.ticker
        );
    }
}

/// Panics if a lower priority match precedes a higher priority one.
pub fn assert_tier_order(results: &[MatchResult]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].match_kind <= pair[1].match_kind,
            "{} ({}) ranked before {} ({})",
            pair[0].ticker,
            pair[0].match_kind,
            pair[1].ticker,
            pair[1].match_kind
        );
    }
}
