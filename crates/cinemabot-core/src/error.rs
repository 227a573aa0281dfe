use thiserror::Error;

#[derive(Debug, Error)]
pub enum CinemaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CinemaError {
    /// Short error code string used in structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            CinemaError::Config(_) => "CONFIG_ERROR",
            CinemaError::Io(_) => "IO_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, CinemaError>;
