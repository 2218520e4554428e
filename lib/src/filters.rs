use image::Rgb;

/// Weighted grayscale of an averaged color
///
/// Formula: L = 0.3*R + 0.59*G + 0.11*B (NTSC weights)
///
/// # Arguments
/// * `color` - Averaged channels in [0, 255], red first
///
/// # Returns
/// Luminance in [0, 255]
pub fn calculate_luminance(color: &Rgb<f64>) -> f64 {
    let [r, g, b] = color.0;
    0.3 * r + 0.59 * g + 0.11 * b
}

/// Luminance scaled to [0, 1]
pub fn normalized_luminance(color: &Rgb<f64>) -> f64 {
    calculate_luminance(color) / 255.0
}
