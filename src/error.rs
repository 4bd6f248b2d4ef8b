use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpError {
    #[error("Division by zero while computing {operation}")]
    DivisionByZero { operation: &'static str },

    #[error("Cannot take the square root of a negative total ({value})")]
    NegativeRadicand { value: f64 },

    #[error("Missing stats field: {0}")]
    MissingField(String),

    #[error("Parse Error: {0}")]
    Parse(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type OpResult<T> = Result<T, OpError>;
