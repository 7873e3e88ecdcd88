use thiserror::Error;

/// Library error type for showreel operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration parsed but failed a semantic check.
    #[error("invalid configuration: {0}")]
    BadConfig(String),

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),
}
