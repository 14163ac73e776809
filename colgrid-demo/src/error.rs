use std::io;

use colgrid::TableError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("table error: {0}")]
    Table(#[from] TableError),
}
