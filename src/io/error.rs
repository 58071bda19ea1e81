//! Error types for grid construction, tileset loading and solver configuration

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tileset contains no tiles
    EmptyTileset,

    /// Collapsed cell refers to a tile outside the tileset
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of tiles in the tileset
        max_tiles: usize,
    },

    /// Cell vector does not match the grid dimensions
    GridSizeMismatch {
        /// Expected number of cells (`cols * rows`)
        expected: usize,
        /// Number of cells actually supplied
        actual: usize,
    },

    /// Tileset document could not be parsed
    TilesetParse {
        /// Path of the tileset document
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyTileset => write!(f, "Tileset must contain at least one tile"),
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(
                    f,
                    "Tile index {index} is out of bounds (tileset has {max_tiles} tiles)"
                )
            }
            Self::GridSizeMismatch { expected, actual } => {
                write!(f, "Grid expects {expected} cells but {actual} were supplied")
            }
            Self::TilesetParse { path, source } => {
                write!(
                    f,
                    "Failed to parse tileset '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TilesetParse { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
