use thiserror::Error;

pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Malformed {table} upload: {source}")]
    MalformedInput {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
