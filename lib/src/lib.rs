//! BMP to ASCII - renders uncompressed 24-bit bitmaps as text
//!
//! The pipeline decodes the two fixed headers, loads the row-padded pixel
//! data, averages 2×4 pixel blocks and maps each block's luminance to a
//! glyph on a 16-step ramp.
//!
//! # Example
//! ```no_run
//! use bmp_ascii::{process_file, RenderConfig};
//!
//! let config = RenderConfig::default();
//! for row in process_file("snail.bmp", &config).unwrap() {
//!     println!("{row}");
//! }
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod filters;
pub mod header;
pub mod lut;
pub mod pixels;
pub mod processor;

// Re-export main types for convenience
pub use config::{INPUT_PATH, RenderConfig};
pub use error::{Error, Result};
pub use header::{FileHeader, InfoHeader, PaletteEntry};
pub use pixels::PixelBuffer;
pub use processor::{process_file, process_reader, render_file};
