//! BMP file and info headers
//!
//! Both headers are read back to back from offset 0, little-endian, with no
//! validation beyond getting the full 54 bytes.

use crate::error::{Error, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Read};

/// Size of the file header in bytes
pub const FILE_HEADER_SIZE: usize = 14;

/// Size of the BITMAPINFOHEADER in bytes
pub const INFO_HEADER_SIZE: usize = 40;

/// "BM" read as a little-endian u16
pub const BMP_SIGNATURE: u16 = 0x4D42;

/// The 14-byte header at the start of every bitmap file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: u16,
    pub file_size: u32,
    pub reserved: u32,
    /// Absolute offset of the pixel data
    pub data_offset: u32,
}

/// The 40-byte info header that follows the file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub size: u32,
    pub width: i32,
    /// Positive means rows are stored bottom-up
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_m: u32,
    pub y_pixels_per_m: u32,
    pub colors_used: u32,
    pub important_colors: u32,
}

/// One color table entry, in on-disk order
///
/// Only indexed-color bitmaps carry a color table; the 24-bit path never
/// reads one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaletteEntry {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub reserved: u8,
}

impl FileHeader {
    fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Self {
            signature: reader.read_u16::<LittleEndian>()?,
            file_size: reader.read_u32::<LittleEndian>()?,
            reserved: reader.read_u32::<LittleEndian>()?,
            data_offset: reader.read_u32::<LittleEndian>()?,
        })
    }

    /// Whether the magic is "BM". Decoding does not depend on this.
    pub fn has_signature(&self) -> bool {
        self.signature == BMP_SIGNATURE
    }
}

impl InfoHeader {
    fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Self {
            size: reader.read_u32::<LittleEndian>()?,
            width: reader.read_i32::<LittleEndian>()?,
            height: reader.read_i32::<LittleEndian>()?,
            planes: reader.read_u16::<LittleEndian>()?,
            bit_count: reader.read_u16::<LittleEndian>()?,
            compression: reader.read_u32::<LittleEndian>()?,
            image_size: reader.read_u32::<LittleEndian>()?,
            x_pixels_per_m: reader.read_u32::<LittleEndian>()?,
            y_pixels_per_m: reader.read_u32::<LittleEndian>()?,
            colors_used: reader.read_u32::<LittleEndian>()?,
            important_colors: reader.read_u32::<LittleEndian>()?,
        })
    }
}

/// Read the file header and info header from a stream positioned at offset 0
///
/// # Errors
/// `Error::HeaderRead` if the stream ends before 54 bytes or the read fails.
pub fn read_headers<R: Read>(reader: &mut R) -> Result<(FileHeader, InfoHeader)> {
    let file_header = FileHeader::read_from(reader).map_err(Error::HeaderRead)?;
    let info_header = InfoHeader::read_from(reader).map_err(Error::HeaderRead)?;

    if !file_header.has_signature() {
        log::warn!(
            "unexpected bitmap signature {:#06x}, decoding anyway",
            file_header.signature
        );
    }
    log::debug!(
        "decoded headers: {}x{} at {} bpp, compression {}, pixel data at {}",
        info_header.width,
        info_header.height,
        info_header.bit_count,
        info_header.compression,
        file_header.data_offset
    );

    Ok((file_header, info_header))
}
