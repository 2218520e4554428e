use bmp_ascii::header::read_headers;
use bmp_ascii::{Error, RenderConfig, process_file, render_file};
use image::{Rgb, RgbImage};
use std::fs::File;
use std::path::Path;
use tempfile::tempdir;

/// Writes a 24-bit bitmap through the `image` crate's encoder
fn create_test_bitmap(path: &Path, width: u32, height: u32, color: impl Fn(u32, u32) -> [u8; 3]) {
    let img = RgbImage::from_fn(width, height, |x, y| Rgb(color(x, y)));
    img.save(path).expect("Failed to create test bitmap.");
}

#[test]
fn test_decodes_third_party_bitmap_headers() -> Result<(), Error> {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("encoded.bmp");
    create_test_bitmap(&path, 5, 6, |_, _| [0, 0, 0]);

    let mut file = File::open(&path).expect("open");
    let (file_header, info_header) = read_headers(&mut file)?;

    assert!(file_header.has_signature());
    assert_eq!(info_header.width, 5);
    assert_eq!(info_header.height, 6);
    assert_eq!(info_header.bit_count, 24);
    assert_eq!(info_header.compression, 0);
    Ok(())
}

#[test]
fn test_renders_top_of_picture_first() -> Result<(), Error> {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("split.bmp");
    // Visual top four rows white, bottom two black
    create_test_bitmap(&path, 5, 6, |_, y| if y < 4 { [255, 255, 255] } else { [0, 0, 0] });

    let rows = process_file(&path, &RenderConfig::default())?;

    assert_eq!(rows, vec!["   ".to_string(), "MMM".to_string()]);
    Ok(())
}

#[test]
fn test_output_shape_matches_block_counts() -> Result<(), Error> {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("gradient.bmp");
    create_test_bitmap(&path, 13, 10, |x, _| {
        let v = (x * 20) as u8;
        [v, v, v]
    });

    let mut out = Vec::new();
    render_file(&path, &RenderConfig::default(), &mut out)?;
    let text = String::from_utf8(out).expect("ascii output");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.len() == 7));
    assert!(text.ends_with('\n') && !text.ends_with("\n\n"));

    // Brighter columns never get a denser glyph
    let ramp = bmp_ascii::config::DEFAULT_RAMP;
    let indices: Vec<usize> = lines[0]
        .chars()
        .map(|c| ramp.find(c).expect("glyph from ramp"))
        .collect();
    assert!(indices.windows(2).all(|w| w[0] <= w[1]));
    Ok(())
}

#[test]
fn test_missing_file_reports_open_error() {
    let dir = tempdir().expect("tempdir");
    let mut out = Vec::new();

    let err = render_file(dir.path().join("snail.bmp"), &RenderConfig::default(), &mut out)
        .unwrap_err();

    assert!(matches!(err, Error::Open { .. }));
    assert!(out.is_empty());
}
