pub mod config;
pub mod error;
pub mod truncate;

pub use config::CinemabotConfig;
pub use error::{CinemaError, Result};
