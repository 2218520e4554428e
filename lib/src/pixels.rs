use crate::error::{Error, Result};
use crate::header::{FileHeader, InfoHeader};
use std::io::{self, Read, Seek, SeekFrom};

/// Bytes per stored row, padded up to a multiple of 4
///
/// `((bit_count * width + 31) / 32) * 4`
pub fn row_stride(bit_count: u16, width: i32) -> i64 {
    ((i64::from(bit_count) * i64::from(width) + 31) / 32) * 4
}

/// Raw pixel rows exactly as stored: bottom-up, row-padded, BGR triples
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    row_stride: usize,
}

impl PixelBuffer {
    pub fn new(data: Vec<u8>, width: u32, height: u32, row_stride: usize) -> Self {
        Self {
            data,
            width,
            height,
            row_stride,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Blue, green, red bytes of the pixel at storage row `y`
    ///
    /// Returns `None` if the triple would fall outside the loaded bytes,
    /// which only happens when the header disagrees with the real layout.
    pub fn bgr(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let offset = (y as usize)
            .checked_mul(self.row_stride)?
            .checked_add((x as usize).checked_mul(3)?)?;
        let px = self.data.get(offset..offset.checked_add(3)?)?;
        Some([px[0], px[1], px[2]])
    }
}

/// Seek to the declared pixel data and read `row_stride * height` bytes
///
/// # Errors
/// * `Error::Geometry` if the buffer size is negative or does not fit in memory
/// * `Error::Seek` if seeking to `data_offset` fails
/// * `Error::PixelRead` if fewer bytes than requested are available
pub fn load_pixels<R: Read + Seek>(
    reader: &mut R,
    file_header: &FileHeader,
    info_header: &InfoHeader,
) -> Result<PixelBuffer> {
    let geometry_error = || Error::Geometry {
        width: info_header.width,
        height: info_header.height,
        bit_count: info_header.bit_count,
    };

    let width = u32::try_from(info_header.width).map_err(|_| geometry_error())?;
    let height = u32::try_from(info_header.height).map_err(|_| geometry_error())?;
    let stride = usize::try_from(row_stride(info_header.bit_count, info_header.width))
        .map_err(|_| geometry_error())?;
    let len = stride
        .checked_mul(height as usize)
        .ok_or_else(geometry_error)?;

    log::debug!("row stride {stride} bytes, reading {len} bytes of pixel data");

    reader
        .seek(SeekFrom::Start(u64::from(file_header.data_offset)))
        .map_err(|source| Error::Seek {
            offset: file_header.data_offset,
            source,
        })?;

    // Only grows with the bytes actually present
    let mut data = Vec::new();
    let read = reader
        .by_ref()
        .take(len as u64)
        .read_to_end(&mut data)
        .map_err(|source| Error::PixelRead {
            expected: len,
            source,
        })?;
    if read < len {
        return Err(Error::PixelRead {
            expected: len,
            source: io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("only {read} bytes available"),
            ),
        });
    }

    Ok(PixelBuffer::new(data, width, height, stride))
}
