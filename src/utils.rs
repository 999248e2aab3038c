pub mod clean_ticker;
pub mod dedup_stock_records;
pub mod merge_stock_records;
pub mod validate_ticker;

pub use clean_ticker::clean_ticker;
pub use dedup_stock_records::dedup_stock_records;
pub use merge_stock_records::merge_stock_records;
pub use validate_ticker::validate_ticker;
