//! Utility functions: time, ids, unit conversion, money formatting.

/// Pixels per millimeter at 96 DPI (96 / 25.4)
pub const PX_PER_MM: f64 = 96.0 / 25.4;

/// Convert millimeters to document pixels
pub fn mm_to_px(mm: f64) -> f64 {
    mm * PX_PER_MM
}

/// Convert document pixels back to millimeters
pub fn px_to_mm(px: f64) -> f64 {
    px / PX_PER_MM
}

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let ts = (now_millis() - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Format cents as a currency string with glyph prefix
///
/// # Examples
///
/// ```
/// use shared::util::format_cents;
///
/// assert_eq!(format_cents(1250), "€12.50");
/// assert_eq!(format_cents(5), "€0.05");
/// ```
pub fn format_cents(cents: i64) -> String {
    format!("€{:.2}", cents as f64 / 100.0)
}
