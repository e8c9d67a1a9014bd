//! PDF Paper Size Library
//!
//! A cross-platform library for normalizing the page sizes of a PDF.
//! This library provides functionality to:
//! - Classify each page's orientation from its first embedded image
//! - Resize every page to a named paper size or custom dimensions
//! - Preserve page rotation across the resize
//! - Resolve target sizes from a built-in preset table
//!
//! # Example
//!
//! ```no_run
//! use pdf_papersize::pdf::{ResizeOptions, resize_pdf};
//! use std::path::PathBuf;
//!
//! let options = ResizeOptions {
//!     input_path: PathBuf::from("scanned-notes.pdf"),
//!     size: Some("A4".to_string()),
//!     custom: None,
//! };
//!
//! resize_pdf(&options).expect("Failed to resize PDF");
//! ```

pub mod error;
pub mod paper;
pub mod classify;
pub mod pdf;

// Re-export commonly used items
pub use error::{Error, Result};
