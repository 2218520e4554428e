use crate::config::RenderConfig;
use crate::filters::normalized_luminance;
use crate::lut::get_fill_char;
use crate::pixels::PixelBuffer;
use image::{ImageBuffer, Rgb};
use std::io::{self, Write};

/// Averaged block colors, red first, at full `f64` precision
pub type BlockImage = ImageBuffer<Rgb<f64>, Vec<f64>>;

/// Number of output cells covering `len` source pixels at `scale` pixels each
fn cells(len: u32, scale: u32) -> u32 {
    len.div_ceil(scale)
}

/// Average one `scale_x` by `scale_y` block anchored at storage row `y`
///
/// The block extends right from `x` and down in storage (up visually) from
/// `y`. Sub-rows below 0 and columns at or past the width are left out of
/// the mean rather than padded. Samples outside the loaded buffer are also
/// skipped; a block with none left averages to black.
///
/// # Returns
/// Mean color, red first
pub fn average_block(pixels: &PixelBuffer, x: u32, y: u32, config: &RenderConfig) -> Rgb<f64> {
    let mut sum = [0.0f64; 3];
    let mut count = 0u32;

    for sub_y in 0..config.scale_y.min(y + 1) {
        for sub_x in 0..config.scale_x {
            let px = x + sub_x;
            if px >= pixels.width() {
                break;
            }
            if let Some([blue, green, red]) = pixels.bgr(px, y - sub_y) {
                sum[0] += f64::from(red);
                sum[1] += f64::from(green);
                sum[2] += f64::from(blue);
                count += 1;
            }
        }
    }

    if count == 0 {
        return Rgb([0.0, 0.0, 0.0]);
    }

    let n = f64::from(count);
    Rgb([sum[0] / n, sum[1] / n, sum[2] / n])
}

/// Downscale the pixel buffer to one averaged color per output character
///
/// Rows are walked from the last stored row (the visual top of a bottom-up
/// bitmap) towards row 0, so row 0 of the result is the top of the picture.
///
/// # Returns
/// Image of `ceil(width / scale_x)` by `ceil(height / scale_y)` average colors
pub fn downscale_to_blocks(pixels: &PixelBuffer, config: &RenderConfig) -> BlockImage {
    let cols = cells(pixels.width(), config.scale_x);
    let rows = cells(pixels.height(), config.scale_y);
    let mut output = BlockImage::new(cols, rows);

    for row in 0..rows {
        let y = pixels.height() - 1 - row * config.scale_y;
        for col in 0..cols {
            let x = col * config.scale_x;
            output.put_pixel(col, row, average_block(pixels, x, y, config));
        }
    }

    log::debug!(
        "downscaled {}x{} pixels to {cols}x{rows} cells",
        pixels.width(),
        pixels.height()
    );

    output
}

/// Select a glyph for every averaged block
///
/// # Returns
/// One string per output row, top to bottom, one glyph per block
///
/// A zero-width grid still yields one empty string per row.
pub fn select_ascii_rows(blocks: &BlockImage, config: &RenderConfig) -> Vec<String> {
    let (width, height) = blocks.dimensions();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let luminance = normalized_luminance(blocks.get_pixel(x, y));
                    get_fill_char(luminance, config.ramp)
                })
                .collect()
        })
        .collect()
}

/// Write each row followed by a newline, with no blank line after the last
pub fn write_rows<W: Write>(rows: &[String], mut out: W) -> io::Result<()> {
    for (i, row) in rows.iter().enumerate() {
        log::trace!("row {i}: {row}");
        writeln!(out, "{row}")?;
    }
    out.flush()
}
