//! Archive tree specification models and top-level error types.

use std::ops::Range;
use std::path::PathBuf;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Whether the generator touches the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumArchiveTreeMode {
    /// Report planned paths only.
    #[default]
    DryRun,
    /// Create every planned directory.
    Apply,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for `create_archive_tree`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecArchiveTreeOptions {
    /// Top-level category directory names.
    pub tables: Vec<String>,
    /// Years to create, end-exclusive.
    pub years: Range<i32>,
    /// Dry-run or apply.
    pub mode: EnumArchiveTreeMode,
}

impl Default for SpecArchiveTreeOptions {
    fn default() -> Self {
        Self {
            tables: vec!["atendimentos_documentos".to_string()],
            years: 2025..2027,
            mode: EnumArchiveTreeMode::DryRun,
        }
    }
}

/// Top-level call failures for `create_archive_tree`.
#[derive(Debug, Error)]
pub enum ArchiveTreeError {
    /// Empty table list, bad table name or empty year range.
    #[error("{0}")]
    InvalidOptions(String),
    /// Directory creation failed for a reason other than "already exists".
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDirFailed {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Path exists but is not a directory.
    #[error("Path exists and is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
