/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Fixed size `magic + width + height` headers
//!
//! Both formats start the same way:
//! ```text
//! ╔════════╤═══════════════════════════════════╗
//! ║ Bytes  │ Description                       ║
//! ╠════════╪═══════════════════════════════════╣
//! ║ n      │ magic value                       ║
//! ╟────────┼───────────────────────────────────╢
//! ║ 4      │ 32-Bit BE unsigned integer (width)║
//! ╟────────┼───────────────────────────────────╢
//! ║ 4      │ 32-Bit BE unsigned integer(height)║
//! ╚════════╧═══════════════════════════════════╝
//! ```
use crate::bytestream::{ZByteIoError, ZByteReaderTrait, ZByteWriterTrait, ZReader, ZWriter};
use crate::pixels::Rect;

/// Longest header supported by [`MagicHeader`]
pub const MAX_HEADER_SIZE: usize = 32;

/// Image width and height as stored in a header
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Dimensions {
    pub width:  u32,
    pub height: u32
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    /// Number of pixels, `width * height`
    pub const fn area(&self) -> u64 {
        (self.width as u64) * (self.height as u64)
    }

    /// Size of a rectangle, or the first side that does not fit in a `u32`
    pub fn from_rect(rect: Rect) -> Result<Dimensions, usize> {
        let width = u32::try_from(rect.width()).map_err(|_| rect.width())?;
        let height = u32::try_from(rect.height()).map_err(|_| rect.height())?;
        Ok(Dimensions { width, height })
    }
}

/// What was found in a header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HeaderContents {
    /// Whether the magic bytes matched the expected ones
    pub magic_matches: bool,
    pub dimensions:    Dimensions
}

/// Layout of a `magic + BE u32 width + BE u32 height` header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MagicHeader {
    magic: &'static [u8]
}

impl MagicHeader {
    /// Describe a header starting with `magic`
    ///
    /// # Panics
    /// If the whole header would be longer than [`MAX_HEADER_SIZE`]
    pub const fn new(magic: &'static [u8]) -> MagicHeader {
        assert!(magic.len() + 8 <= MAX_HEADER_SIZE, "magic too long");
        MagicHeader { magic }
    }

    pub const fn magic(&self) -> &'static [u8] {
        self.magic
    }

    /// Total header length in bytes
    ///
    /// ```
    /// use rawimg_core::header::MagicHeader;
    /// assert_eq!(MagicHeader::new(b"imagefile").size(), 17);
    /// ```
    pub const fn size(&self) -> usize {
        self.magic.len() + 8
    }

    /// Read exactly [`size`](Self::size) bytes and parse them
    ///
    /// The magic is compared but a mismatch is only reported in the
    /// result, it is up to the caller to decide if it's an error.
    ///
    /// # Errors
    /// [`ZByteIoError::NotEnoughBytes`] if the stream ends early
    pub fn read<T: ZByteReaderTrait>(
        &self, stream: &mut ZReader<T>
    ) -> Result<HeaderContents, ZByteIoError> {
        let mut storage = [0_u8; MAX_HEADER_SIZE];
        let header = &mut storage[..self.size()];

        stream.read_exact_bytes(header)?;

        let (magic, dims) = header.split_at(self.magic.len());

        Ok(HeaderContents {
            magic_matches: magic == self.magic,
            dimensions:    Dimensions {
                width:  u32::from_be_bytes([dims[0], dims[1], dims[2], dims[3]]),
                height: u32::from_be_bytes([dims[4], dims[5], dims[6], dims[7]])
            }
        })
    }

    /// Write the magic followed by the dimensions
    pub fn write<T: ZByteWriterTrait>(
        &self, stream: &mut ZWriter<T>, dimensions: Dimensions
    ) -> Result<(), ZByteIoError> {
        stream.write_all(self.magic)?;
        stream.write_u32_be_err(dimensions.width)?;
        stream.write_u32_be_err(dimensions.height)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FF: MagicHeader = MagicHeader::new(b"farbfeld");

    #[test]
    fn test_read_header() {
        let mut stream = ZReader::new(&b"farbfeld\x00\x00\x01\x00\x00\x00\x00\x02rest"[..]);
        let contents = FF.read(&mut stream).unwrap();

        assert!(contents.magic_matches);
        assert_eq!(contents.dimensions, Dimensions::new(256, 2));
        assert_eq!(stream.position(), 16);
    }

    #[test]
    fn test_wrong_magic_is_reported_not_rejected() {
        let mut stream = ZReader::new(&b"imagefil\x00\x00\x00\x01\x00\x00\x00\x01"[..]);
        let contents = FF.read(&mut stream).unwrap();
        assert!(!contents.magic_matches);
        assert_eq!(contents.dimensions, Dimensions::new(1, 1));
    }

    #[test]
    fn test_short_header() {
        let mut stream = ZReader::new(&b"farbfeld\x00\x00\x00\x00\x00\x00\x00"[..]);
        let err = FF.read(&mut stream).unwrap_err();
        assert!(matches!(err, ZByteIoError::NotEnoughBytes(16, 15)));
    }

    #[test]
    fn test_write_header() {
        let mut sink: Vec<u8> = vec![];
        let mut stream = ZWriter::new(&mut sink);
        FF.write(&mut stream, Dimensions::new(2, 3)).unwrap();
        assert_eq!(stream.bytes_written(), 16);
        assert_eq!(sink, b"farbfeld\x00\x00\x00\x02\x00\x00\x00\x03");
    }

    #[test]
    fn test_dimensions_from_rect() {
        assert_eq!(
            Dimensions::from_rect(Rect::new(1, 1, 3, 4)),
            Ok(Dimensions::new(2, 3))
        );
        #[cfg(target_pointer_width = "64")]
        assert_eq!(
            Dimensions::from_rect(Rect::from_dimensions(1 << 33, 1)),
            Err(1 << 33)
        );
    }
}
