use crate::models::StockRecord;
use crate::types::StockRecordList;
use std::collections::HashSet;

/// Deduplicates stock records by ticker while maintaining the original order.
///
/// Tickers are compared uppercase. The first record seen for a ticker wins.
pub fn dedup_stock_records(stock_records: &[StockRecord]) -> StockRecordList {
    let mut seen = HashSet::new();
    stock_records
        .iter()
        .filter_map(|stock_record| {
            if seen.insert(stock_record.ticker.to_uppercase()) {
                Some(stock_record.clone())
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_occurrence() {
        let stock_records = vec![
            StockRecord::new("SQ", "Square Inc"),
            StockRecord::new("PYPL", "PayPal Holdings Inc"),
            StockRecord::new("SQ", "Block Inc"),
        ];

        assert_eq!(
            dedup_stock_records(&stock_records),
            vec![
                StockRecord::new("SQ", "Square Inc"),
                StockRecord::new("PYPL", "PayPal Holdings Inc")
            ]
        );
    }
}
