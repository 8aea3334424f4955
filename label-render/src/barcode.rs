//! Barcode encoding
//!
//! Linear symbologies encoded through the `barcoders` crate. The encoder
//! produces a module pattern; scaling into an element's bounding box is a
//! rendering concern handled by [`BarcodePattern::bars`].

use barcoders::sym::code128::Code128;

use crate::error::EncodeError;

/// Supported linear symbologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Symbology {
    /// CODE128 (full ASCII)
    #[default]
    Code128,
}

impl Symbology {
    pub fn name(self) -> &'static str {
        match self {
            Symbology::Code128 => "CODE128",
        }
    }
}

/// An encoded module pattern: `true` = bar, `false` = space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodePattern {
    modules: Vec<bool>,
}

impl BarcodePattern {
    /// Number of modules in the pattern
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Scale the pattern into a bounding box
    ///
    /// Returns one `(x, y, width, height)` rect per run of consecutive
    /// bars, spanning the full box height. Runs are merged so the output
    /// stays compact.
    pub fn bars(&self, x: f64, y: f64, width: f64, height: f64) -> Vec<(f64, f64, f64, f64)> {
        if self.modules.is_empty() || width <= 0.0 || height <= 0.0 {
            return Vec::new();
        }
        let module_width = width / self.modules.len() as f64;
        let mut rects = Vec::new();
        let mut run_start: Option<usize> = None;

        for (i, &is_bar) in self.modules.iter().enumerate() {
            match (is_bar, run_start) {
                (true, None) => run_start = Some(i),
                (false, Some(start)) => {
                    rects.push((
                        x + start as f64 * module_width,
                        y,
                        (i - start) as f64 * module_width,
                        height,
                    ));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            rects.push((
                x + start as f64 * module_width,
                y,
                (self.modules.len() - start) as f64 * module_width,
                height,
            ));
        }
        rects
    }
}

/// Encode a data string with the given symbology
///
/// CODE128 uses character set B (widest printable range). Empty data and
/// characters outside the symbology's set are encode failures; the caller
/// decides how the affected element degrades.
pub fn encode(data: &str, symbology: Symbology) -> Result<BarcodePattern, EncodeError> {
    if data.is_empty() {
        return Err(EncodeError::Empty);
    }
    match symbology {
        Symbology::Code128 => {
            // barcoders expects a character set selector prefix;
            // "\u{0181}" selects set B (full printable ASCII)
            let prefixed = format!("\u{0181}{}", data);
            let barcode = Code128::new(&prefixed).map_err(|e| EncodeError::Unencodable {
                symbology: symbology.name(),
                reason: e.to_string(),
            })?;
            let modules = barcode.encode().iter().map(|&m| m == 1).collect();
            Ok(BarcodePattern { modules })
        }
    }
}
