use std::fmt;

/// The reason a record matched a query.
///
/// Variants are declared in tier priority order, so the derived `Ord` ranks
/// `ExactTicker` highest (smallest) and `TickerContains` lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchKind {
    ExactTicker,
    /// The query equals a whitespace-delimited word of the company name.
    /// Punctuation stays attached to words, so `AMAZON` does not match
    /// `Amazon.com Inc` here (it matches as `CompanyContains` instead).
    CompanyExactWord,
    TickerStarts,
    CompanyContains,
    TickerContains,
}

impl MatchKind {
    /// All tiers, in the order they are consulted.
    pub const ALL: [MatchKind; 5] = [
        MatchKind::ExactTicker,
        MatchKind::CompanyExactWord,
        MatchKind::TickerStarts,
        MatchKind::CompanyContains,
        MatchKind::TickerContains,
    ];

    /// Snake case tag used by front ends and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::ExactTicker => "exact_ticker",
            MatchKind::CompanyExactWord => "company_exact_word",
            MatchKind::TickerStarts => "ticker_starts",
            MatchKind::CompanyContains => "company_contains",
            MatchKind::TickerContains => "ticker_contains",
        }
    }

    /// Human readable explanation, suitable for a suggestion list.
    pub fn description(&self) -> &'static str {
        match self {
            MatchKind::ExactTicker => "Exact ticker match",
            MatchKind::CompanyExactWord => "Company name contains query as a word",
            MatchKind::TickerStarts => "Ticker starts with query",
            MatchKind::CompanyContains => "Company name contains query",
            MatchKind::TickerContains => "Ticker contains query",
        }
    }

    /// Tests whether an uppercase `ticker` / `company_name` pair satisfies this
    /// tier for an uppercase `query`.
    ///
    /// Case normalization is the caller's job; this compares verbatim.
    pub fn matches(&self, query: &str, ticker: &str, company_name: &str) -> bool {
        match self {
            MatchKind::ExactTicker => ticker == query,
            MatchKind::CompanyExactWord => company_name.split_whitespace().any(|word| word == query),
            MatchKind::TickerStarts => ticker.starts_with(query),
            MatchKind::CompanyContains => company_name.contains(query),
            MatchKind::TickerContains => ticker.contains(query),
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
