//! Per-page resize driver
//!
//! Walks the source document in page order, classifies each page, and
//! rebuilds it at the decided size in the output document. The driver
//! only talks through [`DocumentIo`], so the pipeline is tested with a
//! scripted fake and the lopdf details stay in the backend.

use std::path::{Path, PathBuf};

use crate::classify::{classify, Orientation, PageGeometry};
use crate::error::{Error, Result};
use crate::paper::{resolve_target, TargetSize};
use crate::pdf::backend::LopdfBackend;
use crate::pdf::document::DocumentIo;

/// Options for a resize run
#[derive(Debug, Clone)]
pub struct ResizeOptions {
    /// Input PDF file path
    pub input_path: PathBuf,
    /// Paper size preset name, if one was given
    pub size: Option<String>,
    /// Custom width and height in points, if given
    pub custom: Option<(u32, u32)>,
}

/// What the conversion did to one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOutcome {
    /// Page number, 1-based
    pub number: u32,
    /// Rotation captured from the source page
    pub rotation: i64,
    /// Orientation class the page matched
    pub orientation: Orientation,
    /// Output page width in points
    pub width: f64,
    /// Output page height in points
    pub height: f64,
}

/// Result of a whole resize run.
#[derive(Debug)]
pub struct ResizeReport {
    /// Where the converted document was written
    pub output_path: PathBuf,
    /// Per-page outcomes in page order
    pub pages: Vec<PageOutcome>,
}

/// Resize every page of a PDF, writing the result next to the input.
///
/// The output filename is the input name with its `.pdf` suffix replaced
/// by `-FORMATED-<LABEL>.pdf`, where LABEL names the resolved target.
///
/// # Example
///
/// ```no_run
/// use pdf_papersize::pdf::{resize_pdf, ResizeOptions};
/// use std::path::PathBuf;
///
/// let options = ResizeOptions {
///     input_path: PathBuf::from("scan.pdf"),
///     size: Some("A4".to_string()),
///     custom: None,
/// };
///
/// resize_pdf(&options).expect("Failed to resize");
/// ```
pub fn resize_pdf(options: &ResizeOptions) -> Result<ResizeReport> {
    if !options.input_path.exists() {
        return Err(Error::FileNotFound(options.input_path.clone()));
    }

    let mut document = LopdfBackend::open(&options.input_path)?;
    let target = resolve_target(options.size.as_deref(), options.custom)?;

    let pages = resize_pages(&mut document, &target)?;

    let output_path = derive_output_path(&options.input_path, &target.label);
    document.save(&output_path)?;

    Ok(ResizeReport { output_path, pages })
}

/// Run the per-page pipeline against any document backend.
///
/// Rotation is captured and cleared before the geometry reads, so the
/// image and media box are seen the way they are stored; the captured
/// value goes back onto the new page only after its content is placed.
pub fn resize_pages<D: DocumentIo>(
    document: &mut D,
    target: &TargetSize,
) -> Result<Vec<PageOutcome>> {
    let mut outcomes = Vec::with_capacity(document.page_count());

    for index in 0..document.page_count() {
        let rotation = document.rotation(index)?;
        document.reset_rotation(index)?;

        let image = document.first_image_size(index)?;
        let (media_width, media_height) = document.media_box(index)?;
        let geometry = PageGeometry {
            image,
            media_width,
            media_height,
        };
        let orientation = classify(&geometry);
        let (width, height) = orientation.output_size(target, media_width, media_height);

        let page = document.new_page(width, height)?;
        document.place_page(page, index)?;
        if rotation != 0 {
            document.set_rotation(page, rotation)?;
        }

        let number = (index + 1) as u32;
        println!(
            "Page: {}\tRotation: {}\t>> {}",
            number,
            rotation,
            orientation.label()
        );

        outcomes.push(PageOutcome {
            number,
            rotation,
            orientation,
            width,
            height,
        });
    }

    Ok(outcomes)
}

/// Build the output path next to the input file.
///
/// A trailing `.pdf` is stripped whatever its capitalization; any other
/// extension stays part of the base name.
pub fn derive_output_path(input: &Path, label: &str) -> PathBuf {
    let name = match input.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => String::new(),
    };
    let stem = strip_pdf_suffix(&name);
    // Not a typo: downstream scripts match on "FORMATED".
    let file_name = format!("{}-FORMATED-{}.pdf", stem, label);
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

fn strip_pdf_suffix(name: &str) -> &str {
    let cut = name.len().saturating_sub(4);
    match name.get(cut..) {
        Some(suffix) if suffix.eq_ignore_ascii_case(".pdf") => &name[..cut],
        _ => name,
    }
}
