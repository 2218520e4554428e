//! Luminance to glyph lookup
//!
//! The ramp runs from the densest glyph (`M`) to the emptiest (space), so a
//! dark pixel prints as heavy ink and white prints as blank.

/// Ramp index for a normalized luminance
///
/// `floor(luminance * (ramp_len - 1))`, clamped to the last index so a
/// corrupt channel value can never index past the ramp.
///
/// # Arguments
/// * `luminance` - Normalized luminance, nominally [0.0, 1.0]
/// * `ramp_len` - Number of glyphs in the ramp, at least 1
pub fn ramp_index(luminance: f64, ramp_len: usize) -> usize {
    let last = ramp_len.saturating_sub(1);
    let index = (luminance * last as f64).floor();
    if index <= 0.0 {
        0
    } else {
        (index as usize).min(last)
    }
}

/// Glyph for a normalized luminance from an ASCII ramp
pub fn get_fill_char(luminance: f64, ramp: &str) -> char {
    let bytes = ramp.as_bytes();
    match bytes.get(ramp_index(luminance, bytes.len())) {
        Some(&b) => b as char,
        None => ' ',
    }
}
