//! Error types for the simulation core

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Benign outcomes (no input, no overlap, no spawn yet) are
/// ordinary values and never appear here.
#[derive(Debug, Error)]
pub enum Error {
    /// A frame asset could not be read
    #[error("failed to read asset {}: {source}", .path.display())]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A frame asset has no visible content
    #[error("asset {} is empty", .path.display())]
    EmptyAsset { path: PathBuf },

    /// A frame set was requested with zero frames
    #[error("frame set `{name}` has no frames")]
    EmptyFrameSet { name: String },

    /// The terminal cannot fit the playfield
    #[error("terminal too small: {rows}x{cols}")]
    CanvasTooSmall { rows: u16, cols: u16 },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
