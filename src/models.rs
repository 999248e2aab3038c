pub mod error;
pub use error::Error;

pub mod match_kind;
pub use match_kind::MatchKind;

pub mod match_result;
pub use match_result::MatchResult;

pub mod merge_report;
pub use merge_report::MergeReport;

pub mod stock_record;
pub use stock_record::StockRecord;

pub mod stock_record_list_preprocessor;
pub use stock_record_list_preprocessor::StockRecordListPreprocessor;

pub mod ticker_search_ranker;
pub use ticker_search_ranker::TickerSearchRanker;
