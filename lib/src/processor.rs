use crate::ascii::{downscale_to_blocks, select_ascii_rows, write_rows};
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::header::read_headers;
use crate::pixels::load_pixels;
use std::fs::File;
use std::io::{BufReader, Read, Seek, Write};
use std::path::Path;

/// Decodes a bitmap stream and converts it to ASCII art rows
///
/// This runs the whole pipeline:
/// 1. Read the file and info headers
/// 2. Seek to the pixel data and load `row_stride * height` bytes
/// 3. Average `scale_x` by `scale_y` blocks, clipped at the image edges
/// 4. Map each block's luminance to a glyph from the ramp
///
/// # Arguments
/// * `reader` - Stream positioned at the start of the bitmap
/// * `config` - Sampling and glyph settings
///
/// # Returns
/// One string per output row, top to bottom
pub fn process_reader<R: Read + Seek>(mut reader: R, config: &RenderConfig) -> Result<Vec<String>> {
    config.validate()?;

    let (file_header, info_header) = read_headers(&mut reader)?;
    let pixels = load_pixels(&mut reader, &file_header, &info_header)?;
    let blocks = downscale_to_blocks(&pixels, config);

    Ok(select_ascii_rows(&blocks, config))
}

/// Opens `path` and converts it with [`process_reader`]
///
/// The file is closed before this returns, on success and on every error.
pub fn process_file<P: AsRef<Path>>(path: P, config: &RenderConfig) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    process_reader(BufReader::new(file), config)
}

/// Renders `path` to `out`, one line per output row
///
/// Nothing is written unless the whole bitmap decoded.
pub fn render_file<P: AsRef<Path>, W: Write>(path: P, config: &RenderConfig, out: W) -> Result<()> {
    let rows = process_file(path, config)?;
    write_rows(&rows, out).map_err(Error::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// 24-bit bottom-up bitmap with every pixel set to `rgb`
    fn solid_bitmap(width: i32, height: i32, rgb: [u8; 3]) -> Vec<u8> {
        let stride = crate::pixels::row_stride(24, width) as usize;
        let data_len = stride * height as usize;
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"BM");
        bytes.extend_from_slice(&((54 + data_len) as u32).to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&54u32.to_le_bytes());
        bytes.extend_from_slice(&40u32.to_le_bytes());
        bytes.extend_from_slice(&width.to_le_bytes());
        bytes.extend_from_slice(&height.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&24u16.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 24]);
        for _ in 0..height {
            let mut row = Vec::with_capacity(stride);
            for _ in 0..width {
                row.extend_from_slice(&[rgb[2], rgb[1], rgb[0]]);
            }
            row.resize(stride, 0);
            bytes.extend_from_slice(&row);
        }
        bytes
    }

    #[test]
    fn test_white_4x4_renders_two_spaces() {
        let bytes = solid_bitmap(4, 4, [255, 255, 255]);
        let rows = process_reader(Cursor::new(bytes), &RenderConfig::default()).unwrap();
        assert_eq!(rows, vec!["  ".to_string()]);
    }

    #[test]
    fn test_black_4x4_renders_two_m() {
        let bytes = solid_bitmap(4, 4, [0, 0, 0]);
        let rows = process_reader(Cursor::new(bytes), &RenderConfig::default()).unwrap();
        assert_eq!(rows, vec!["MM".to_string()]);
    }

    #[test]
    fn test_output_shape_with_padding() {
        // stride 16 for width 5, so rows carry one padding byte
        let bytes = solid_bitmap(5, 9, [0, 0, 0]);
        let rows = process_reader(Cursor::new(bytes), &RenderConfig::default()).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row == "MMM"));
    }

    #[test]
    fn test_truncated_pixel_data() {
        let mut bytes = solid_bitmap(4, 4, [0, 0, 0]);
        bytes.truncate(bytes.len() - 1);
        let err = process_reader(Cursor::new(bytes), &RenderConfig::default()).unwrap_err();
        assert!(matches!(err, Error::PixelRead { expected: 48, .. }));
    }

    #[test]
    fn test_truncated_header() {
        let err = process_reader(Cursor::new(vec![b'B', b'M', 0, 0]), &RenderConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::HeaderRead(_)));
    }

    #[test]
    fn test_invalid_config_rejected_before_reading() {
        let config = RenderConfig {
            scale_x: 0,
            ..Default::default()
        };
        let err = process_reader(Cursor::new(Vec::new()), &config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
