use crate::models::{MatchKind, StockRecord};
use crate::types::{CompanyName, TickerSymbol};

/// A single ranked search hit. Built fresh per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub ticker: TickerSymbol,
    pub company_name: CompanyName,
    pub match_kind: MatchKind,
}

impl MatchResult {
    pub fn new(record: &StockRecord, match_kind: MatchKind) -> Self {
        Self {
            ticker: record.ticker.clone(),
            company_name: record.company_name.clone(),
            match_kind,
        }
    }

    /// Suggestion list text, e.g. `AAPL - Apple Inc`.
    pub fn display(&self) -> String {
        format!("{} - {}", self.ticker, self.company_name)
    }
}
