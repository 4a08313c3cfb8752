use loppers_skeleton::SkeletonError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for file-layer operations
pub type Result<T> = std::result::Result<T, FilesError>;

/// Errors raised while discovering, reading or concatenating files
#[derive(Error, Debug)]
pub enum FilesError {
    #[error("Root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Expected a directory at: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No file paths provided")]
    EmptyFileList,

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The extension does not map to a registered language
    #[error("Unsupported file type: {}", .0.display())]
    UnsupportedFileType(PathBuf),

    #[error("Could not read file as text: {}", .0.display())]
    NotText(PathBuf),

    #[error("Invalid ignore pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Skeleton(#[from] SkeletonError),
}
