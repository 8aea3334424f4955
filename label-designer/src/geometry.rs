//! Geometry helpers: zoom mapping and bounds clamping
//!
//! Element geometry is stored in un-zoomed document pixels. Zoom is a
//! presentation-only scale applied when mapping pointer coordinates back
//! into document space; it never touches stored geometry.

use shared::models::ElementGeometry;

/// Smallest element dimension in document pixels
pub const MIN_ELEMENT_SIZE: f64 = 1.0;

/// Discrete zoom levels offered by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zoom {
    Z50,
    Z75,
    #[default]
    Z100,
    Z125,
    Z150,
    Z200,
}

impl Zoom {
    /// All selectable levels, ascending
    pub const ALL: [Zoom; 6] = [
        Zoom::Z50,
        Zoom::Z75,
        Zoom::Z100,
        Zoom::Z125,
        Zoom::Z150,
        Zoom::Z200,
    ];

    /// Zoom percentage
    pub fn percent(self) -> u32 {
        match self {
            Zoom::Z50 => 50,
            Zoom::Z75 => 75,
            Zoom::Z100 => 100,
            Zoom::Z125 => 125,
            Zoom::Z150 => 150,
            Zoom::Z200 => 200,
        }
    }

    /// Scale factor applied to the visual presentation
    pub fn scale(self) -> f64 {
        self.percent() as f64 / 100.0
    }
}

/// Translate a pointer position (relative to the canvas origin on screen)
/// into document coordinates at the given zoom
pub fn screen_to_document(screen_x: f64, screen_y: f64, zoom: Zoom) -> (f64, f64) {
    let scale = zoom.scale();
    (screen_x / scale, screen_y / scale)
}

/// Clamp an element position so its bounding box stays inside
/// `[0, width_px] x [0, height_px]`
pub fn clamp_position(geometry: &mut ElementGeometry, width_px: f64, height_px: f64) {
    geometry.x = geometry.x.clamp(0.0, (width_px - geometry.width).max(0.0));
    geometry.y = geometry.y.clamp(0.0, (height_px - geometry.height).max(0.0));
}

/// Correct geometry violations by clamping (never an error)
///
/// Non-positive dimensions snap to [`MIN_ELEMENT_SIZE`], oversized boxes
/// shrink to the document, rotation folds into [-360, 360], and the
/// position is clamped into bounds.
pub fn clamp_geometry(geometry: &mut ElementGeometry, width_px: f64, height_px: f64) {
    geometry.width = geometry.width.max(MIN_ELEMENT_SIZE).min(width_px);
    geometry.height = geometry.height.max(MIN_ELEMENT_SIZE).min(height_px);
    geometry.rotation_degrees = geometry.rotation_degrees.clamp(-360.0, 360.0);
    clamp_position(geometry, width_px, height_px);
}
