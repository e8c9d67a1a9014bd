//! Page orientation classification
//!
//! Scanned documents report their true orientation through the embedded
//! scan image, not through the page rectangle, so classification compares
//! the first image's pixel shape against the media box. The rules form an
//! ordered table; the first matching row decides the page.

use crate::paper::TargetSize;

/// Pixel dimensions reported by an embedded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: i64,
    pub height: i64,
}

/// Geometry inputs for one source page, read after rotation is cleared.
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    /// First embedded image on the page, if any.
    pub image: Option<ImageSize>,
    /// Media box width in points.
    pub media_width: f64,
    /// Media box height in points.
    pub media_height: f64,
}

/// Orientation class of a page, deciding the output page shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Wide image on a width-dominant media box.
    Portrait,
    /// Tall image on a height-dominant media box.
    Landscape,
    /// Image with equal sides; treated as landscape output.
    Square,
    /// Image and media box shapes disagree; the page is left alone.
    Unrecognized,
}

/// Classify one page.
///
/// Rows are checked in order and the first match wins; a square image is
/// only reached when neither oriented row fired. Pages without any
/// embedded image fall back to the shape of the media box alone.
pub fn classify(geometry: &PageGeometry) -> Orientation {
    let dominant = geometry.media_width.max(geometry.media_height);
    match geometry.image {
        Some(image) if image.height < image.width && geometry.media_width == dominant => {
            Orientation::Portrait
        }
        Some(image) if image.height > image.width && geometry.media_height == dominant => {
            Orientation::Landscape
        }
        Some(image) if image.height == image.width => Orientation::Square,
        Some(_) => Orientation::Unrecognized,
        None if geometry.media_height > geometry.media_width => Orientation::Portrait,
        None => Orientation::Landscape,
    }
}

impl Orientation {
    /// Output page size in points for this class.
    ///
    /// Unrecognized pages keep their original media box size; the other
    /// classes take the target in the matching orientation.
    pub fn output_size(self, target: &TargetSize, media_width: f64, media_height: f64) -> (f64, f64) {
        match self {
            Orientation::Portrait => (target.width, target.height),
            Orientation::Landscape | Orientation::Square => (target.height, target.width),
            Orientation::Unrecognized => (media_width, media_height),
        }
    }

    /// Progress label printed for each page.
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Portrait => "Portrait",
            Orientation::Landscape => "Landscape",
            Orientation::Square => "Perfect square > converting to landscape",
            Orientation::Unrecognized => "PAGE SIZE NOT RECOGNIZED > keeping the original",
        }
    }
}
