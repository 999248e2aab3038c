use crate::types::{CompanyName, TickerSymbol};
use std::fmt;

/// A single searchable `(ticker, company_name)` pair.
///
/// Tickers are stored uppercase. Records are treated as immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StockRecord {
    pub ticker: TickerSymbol,
    pub company_name: CompanyName,
}

impl StockRecord {
    /// Creates a record, uppercasing the ticker.
    pub fn new(ticker: &str, company_name: &str) -> Self {
        Self {
            ticker: ticker.to_uppercase(),
            company_name: company_name.to_string(),
        }
    }
}

impl From<(&str, &str)> for StockRecord {
    fn from((ticker, company_name): (&str, &str)) -> Self {
        Self::new(ticker, company_name)
    }
}

impl fmt::Display for StockRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.ticker, self.company_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uppercases_ticker() {
        let record = StockRecord::new("brk.b", "Berkshire Hathaway Inc Class B");
        assert_eq!(record.ticker, "BRK.B");
        assert_eq!(record.company_name, "Berkshire Hathaway Inc Class B");
    }

    #[test]
    fn test_display() {
        let record = StockRecord::from(("AAPL", "Apple Inc"));
        assert_eq!(record.to_string(), "AAPL - Apple Inc");
    }
}
