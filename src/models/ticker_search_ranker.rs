use crate::models::{MatchKind, MatchResult, StockRecord};
use crate::types::MaxResults;
use log::{debug, trace};
use std::collections::HashSet;

/// Uppercase copies of a record's searchable fields.
type NormalizedEntry = (String, String);

/// Ranks `StockRecord`s against a query using five priority tiers.
///
/// The ranker borrows the record list and keeps uppercase copies of every
/// ticker and company name, so it can be built once and reused for every
/// keystroke of an interactive search.
pub struct TickerSearchRanker<'a> {
    records: &'a [StockRecord],
    normalized_entries: Vec<NormalizedEntry>,
}

impl<'a> TickerSearchRanker<'a> {
    pub fn new(records: &'a [StockRecord]) -> Self {
        let normalized_entries = records
            .iter()
            .map(|record| {
                (
                    record.ticker.to_uppercase(),
                    record.company_name.to_uppercase(),
                )
            })
            .collect();

        Self {
            records,
            normalized_entries,
        }
    }

    /// The record list this ranker was built over.
    pub fn records(&self) -> &'a [StockRecord] {
        self.records
    }

    /// Returns at most `max_results` matches for `query`.
    ///
    /// Tiers are consulted in `MatchKind::ALL` order; within a tier, results
    /// follow the record order. A ticker is emitted at most once, under the
    /// first tier that matched it. The query is uppercased but not trimmed.
    pub fn search(&self, query: &str, max_results: MaxResults) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = Vec::new();

        if query.is_empty() || max_results == 0 {
            return results;
        }

        let query = query.to_uppercase();
        let mut seen_tickers: HashSet<&str> = HashSet::new();

        'tiers: for match_kind in MatchKind::ALL {
            for (record, (ticker, company_name)) in
                self.records.iter().zip(self.normalized_entries.iter())
            {
                if results.len() >= max_results {
                    break 'tiers;
                }

                if seen_tickers.contains(ticker.as_str()) {
                    continue;
                }

                if match_kind.matches(&query, ticker, company_name) {
                    trace!("{} matched {} as {}", query, ticker, match_kind);

                    seen_tickers.insert(ticker.as_str());
                    results.push(MatchResult::new(record, match_kind));
                }
            }
        }

        debug!(
            "Query {:?} produced {} result(s) from {} record(s)",
            query,
            results.len(),
            self.records.len()
        );

        results
    }
}
