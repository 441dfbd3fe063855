pub mod config;
pub mod motion;
pub mod ui;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum FlowcaseError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Document error: {0}")]
    DocumentError(String),
}

pub type Result<T> = std::result::Result<T, FlowcaseError>;
