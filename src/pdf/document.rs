//! Document access surface used by the resize driver
//!
//! The driver cares about a handful of reads and writes, not about the
//! PDF object model, so it talks through this trait. Tests drive it with
//! a scripted fake; production uses [`LopdfBackend`](super::LopdfBackend).

use std::path::Path;

use crate::classify::ImageSize;
use crate::error::Result;

/// Handle for a page created in the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputPage(pub(crate) usize);

/// Reads from a source document and writes to the output built beside it.
///
/// Source pages are addressed by zero-based index in document order.
pub trait DocumentIo {
    /// Number of pages in the source document.
    fn page_count(&self) -> usize;

    /// Media box width and height of a source page, in points.
    fn media_box(&self, index: usize) -> Result<(f64, f64)>;

    /// `/Rotate` value of a source page, 0 when absent.
    fn rotation(&self, index: usize) -> Result<i64>;

    /// Clear the source page's rotation so geometry reads ignore it.
    fn reset_rotation(&mut self, index: usize) -> Result<()>;

    /// Pixel dimensions of the first embedded image, in document order.
    fn first_image_size(&self, index: usize) -> Result<Option<ImageSize>>;

    /// Append a page of the given size to the output document.
    fn new_page(&mut self, width: f64, height: f64) -> Result<OutputPage>;

    /// Draw source page `index` scaled to exactly fill the output page.
    fn place_page(&mut self, page: OutputPage, index: usize) -> Result<()>;

    /// Set the output page's rotation.
    fn set_rotation(&mut self, page: OutputPage, degrees: i64) -> Result<()>;

    /// Write the output document to `path`.
    fn save(&mut self, path: &Path) -> Result<()>;
}
