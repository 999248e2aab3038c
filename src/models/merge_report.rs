use crate::models::StockRecord;
use crate::types::TickerSymbol;

/// Outcome of merging a seed list into an existing stock record list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub added: Vec<StockRecord>,
    pub already_present: Vec<TickerSymbol>,
}

impl MergeReport {
    /// True when the merge neither added nor skipped anything.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.already_present.is_empty()
    }
}
