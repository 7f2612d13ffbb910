// File: crates/livechart-core/src/error.rs
// Summary: Error type for configuration loading and frame output.

use std::path::PathBuf;

/// Failures surfaced by the crate. Chart interaction itself never fails;
/// only configuration and output rendering do.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("invalid chart config: {0}")]
    Config(String),

    #[error("failed to parse chart config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ChartError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
