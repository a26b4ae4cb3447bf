use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinearcError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Degenerate arc: {0}")]
    DegenerateArc(String),

    #[error("Tolerance too strict: {required} segments required, cap is {cap}")]
    ToleranceTooStrict { required: usize, cap: usize },
}

pub type Result<T> = std::result::Result<T, LinearcError>;
