use std::io;
use std::path::PathBuf;

/// Errors produced while decoding a bitmap and rendering it as ASCII art
///
/// Every variant aborts the pipeline. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read bitmap headers: {0}")]
    HeaderRead(#[source] io::Error),

    #[error("failed to seek to pixel data at offset {offset}: {source}")]
    Seek {
        offset: u32,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {expected} bytes of pixel data: {source}")]
    PixelRead {
        expected: usize,
        #[source]
        source: io::Error,
    },

    /// Declared geometry whose pixel buffer size cannot be represented
    #[error("unsupported geometry: {width}x{height} at {bit_count} bits per pixel")]
    Geometry {
        width: i32,
        height: i32,
        bit_count: u16,
    },

    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to write rendered output: {0}")]
    Output(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
