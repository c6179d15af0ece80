use thiserror::Error;

/// Rejected repair options.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown character set label `{0}`")]
    UnknownCharset(String),
    #[error("{name} must be within [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },
    #[error("fill color `{0}` is not a 6 or 8 digit hex color")]
    InvalidColor(String),
    #[error("replacement pattern must not be empty (replacement `{0}`)")]
    EmptyPattern(String),
}
