//! Error types for the cubes core library

use thiserror::Error;

/// Result type for cubes operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside of projection (which is total)
#[derive(Error, Debug)]
pub enum Error {
    /// Canvas with a zero-sized side
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
