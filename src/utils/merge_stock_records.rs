use crate::models::{MergeReport, StockRecord};
use crate::types::StockRecordList;
use std::collections::HashSet;

/// Merges seed `additions` into `existing`.
///
/// Every existing record is kept. An addition is appended only if its
/// ticker (compared uppercase) is not already present, either in `existing`
/// or earlier in `additions`. The merged list is sorted by ticker; the
/// report lists added records and skipped tickers in input order.
pub fn merge_stock_records(
    existing: &[StockRecord],
    additions: &[StockRecord],
) -> (StockRecordList, MergeReport) {
    let mut known_tickers: HashSet<String> = existing
        .iter()
        .map(|stock_record| stock_record.ticker.to_uppercase())
        .collect();

    let mut merged: StockRecordList = existing.to_vec();
    let mut report = MergeReport::default();

    for addition in additions {
        let ticker = addition.ticker.to_uppercase();

        if known_tickers.insert(ticker.clone()) {
            merged.push(addition.clone());
            report.added.push(addition.clone());
        } else {
            report.already_present.push(ticker);
        }
    }

    merged.sort_by_key(|stock_record| stock_record.ticker.to_uppercase());

    (merged, report)
}
