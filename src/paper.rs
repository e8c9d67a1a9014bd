//! Paper size presets and target size resolution
//!
//! All measurements are PostScript points (1/72 inch). Preset entries are
//! stored portrait, width <= height; orientation is decided per page later.

use crate::error::{Error, Result};

/// Preset used when the command line names no size at all.
pub const DEFAULT_SIZE: &str = "A4";

/// A named paper size in points, portrait orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperSize {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
}

/// Recognized paper sizes: ISO A and B series plus the common ANSI ones.
pub const PAPER_SIZES: &[PaperSize] = &[
    PaperSize { name: "A0", width: 2384.0, height: 3370.0 },
    PaperSize { name: "A1", width: 1684.0, height: 2384.0 },
    PaperSize { name: "A2", width: 1191.0, height: 1684.0 },
    PaperSize { name: "A3", width: 842.0, height: 1191.0 },
    PaperSize { name: "A4", width: 595.0, height: 842.0 },
    PaperSize { name: "A5", width: 420.0, height: 595.0 },
    PaperSize { name: "A6", width: 298.0, height: 420.0 },
    PaperSize { name: "A7", width: 210.0, height: 298.0 },
    PaperSize { name: "A8", width: 147.0, height: 210.0 },
    PaperSize { name: "B0", width: 2835.0, height: 4008.0 },
    PaperSize { name: "B1", width: 2004.0, height: 2835.0 },
    PaperSize { name: "B2", width: 1417.0, height: 2004.0 },
    PaperSize { name: "B3", width: 1001.0, height: 1417.0 },
    PaperSize { name: "B4", width: 709.0, height: 1001.0 },
    PaperSize { name: "B5", width: 499.0, height: 709.0 },
    PaperSize { name: "Letter", width: 612.0, height: 792.0 },
    PaperSize { name: "Legal", width: 612.0, height: 1008.0 },
    PaperSize { name: "Tabloid", width: 792.0, height: 1224.0 },
    PaperSize { name: "Executive", width: 522.0, height: 756.0 },
    PaperSize { name: "AnsiC", width: 1224.0, height: 1584.0 },
    PaperSize { name: "AnsiD", width: 1584.0, height: 2448.0 },
    PaperSize { name: "AnsiE", width: 2448.0, height: 3168.0 },
];

/// Target size for a whole conversion run.
///
/// `label` is interpolated into the output filename, so it is the preset
/// name in uppercase, or `CUSTOM` for caller-supplied dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSize {
    pub width: f64,
    pub height: f64,
    pub label: String,
}

/// Find a preset by name, ignoring ASCII case.
pub fn lookup(name: &str) -> Result<&'static PaperSize> {
    PAPER_SIZES
        .iter()
        .find(|size| size.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownPaperSize(name.to_string()))
}

/// Resolve the target size from the command line arguments.
///
/// A preset name wins over custom dimensions when both are given. Custom
/// dimensions are normalized to portrait so the per-page orientation logic
/// sees the same shape as a preset entry.
pub fn resolve_target(size: Option<&str>, custom: Option<(u32, u32)>) -> Result<TargetSize> {
    if let Some(name) = size {
        let preset = lookup(name)?;
        return Ok(TargetSize {
            width: preset.width,
            height: preset.height,
            label: preset.name.to_uppercase(),
        });
    }

    if let Some((width, height)) = custom {
        if width == 0 || height == 0 {
            return Err(Error::InvalidCustomSize(width, height));
        }
        let (width, height) = if width > height {
            (height, width)
        } else {
            (width, height)
        };
        return Ok(TargetSize {
            width: f64::from(width),
            height: f64::from(height),
            label: "CUSTOM".to_string(),
        });
    }

    let preset = lookup(DEFAULT_SIZE)?;
    Ok(TargetSize {
        width: preset.width,
        height: preset.height,
        label: preset.name.to_uppercase(),
    })
}

/// Listing printed by `--options`.
pub fn catalog() -> String {
    let mut out = String::from("Recognized paper sizes (points, width x height):\n");
    for size in PAPER_SIZES {
        out.push_str(&format!(
            "  {:<10} {:>5} x {:<5}\n",
            size.name, size.width, size.height
        ));
    }
    out.push_str("Or pass --custom <WIDTH> <HEIGHT> in points.\n");
    out
}
