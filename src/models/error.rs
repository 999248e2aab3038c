use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Parser Error: {0}")]
    ParserError(String),

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
}
