use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClimateError>;

#[derive(Error, Debug)]
pub enum ClimateError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Invalid {field} date: '{value}' is not a YYYY-MM-DD date")]
    InvalidDate { field: String, value: String },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Duplicate station code: {code}")]
    DuplicateStation { code: String },

    #[error("Dataset is empty: {0}")]
    EmptyDataset(String),

    #[error("No measurements matched: {0}")]
    NoData(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}
