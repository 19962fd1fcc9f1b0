#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Unspecified(String),

    #[error("{0}")]
    NetworkError(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("{0}")]
    DecodeError(String),

    #[error("invalid URL \"{url}\" ({reason})")]
    InvalidUrl { url: String, reason: String },

    #[error("row {line} has {columns} columns, expected at least {expected}")]
    MalformedRow {
        line: usize,
        columns: usize,
        expected: usize,
    },
}
