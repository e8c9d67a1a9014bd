//! Error types for the PDF paper size library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the PDF paper size library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No input file was given on the command line
    #[error("No input file given (use --file <PATH>)")]
    MissingInput,

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Paper size name not in the table
    #[error("Unknown paper size: {0} (use --options to list the recognized names)")]
    UnknownPaperSize(String),

    /// Custom dimensions that cannot describe a page
    #[error("Invalid custom size: {0} x {1} (both dimensions must be positive)")]
    InvalidCustomSize(u32, u32),

    /// Page dictionary missing or carrying unusable entries
    #[error("Malformed page: {0}")]
    MalformedPage(String),
}
