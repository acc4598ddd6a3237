use thiserror::Error;

#[derive(Error, Debug)]
pub enum TmError {
    #[error("Index out of range: index {index}, length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Invalid position: {position} not in [0, {len}]")]
    InvalidPosition { position: usize, len: usize },
    #[error("Line {line} too long: {len} bytes, limit {max_len}")]
    LineTooLong { line: usize, len: usize, max_len: usize },
    #[error("Line table overflow: more than {max_lines} lines")]
    LineTableOverflow { max_lines: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Stage {index} ({name}) failed: {source}")]
    Stage {
        index: usize,
        name: String,
        #[source]
        source: Box<TmError>,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TmError>;
