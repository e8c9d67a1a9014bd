//! PDF document handling

pub mod backend;
pub mod document;
pub mod resize;

// Re-export commonly used items
pub use backend::LopdfBackend;
pub use document::{DocumentIo, OutputPage};
pub use resize::{derive_output_path, resize_pages, resize_pdf, PageOutcome, ResizeOptions, ResizeReport};
