/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for all supported codecs the library understands
//!
//! Each codec module re-exports its codec crate and provides a `register`
//! function adding it to the process wide [registry](crate::registry).
//!
//! PNG and JPEG are decode only, behind the `png` and `jpeg` features.
use rawimg_core::bytestream::ZByteWriterTrait;
use rawimg_core::log::trace;
use rawimg_core::pixels::PixelLayout;
use rawimg_core::source::PixelSource;

use crate::errors::ImageErrors;

pub mod farbfeld;
pub mod imagefile;
pub mod jpeg;
pub mod png;
mod samples;

/// All supported image formats
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ImageFormat {
    /// 8 bit straight alpha RGBA
    ImageFile,
    /// 16 bit big endian straight alpha RGBA
    Farbfeld,
    /// Portable Network Graphics, decode only
    PNG,
    /// Joint Photographic Experts Group, decode only
    JPEG,
    /// Any unknown format
    Unknown
}

impl ImageFormat {
    /// Return the format matching a file extension, without the dot
    ///
    /// ```
    /// use rawimg_image::codecs::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::encoder_for_extension("if"), Some(ImageFormat::ImageFile));
    /// assert_eq!(ImageFormat::encoder_for_extension("ff"), Some(ImageFormat::Farbfeld));
    /// assert_eq!(ImageFormat::encoder_for_extension("png"), None);
    /// ```
    pub fn encoder_for_extension<P: AsRef<str>>(extension: P) -> Option<ImageFormat> {
        match extension.as_ref() {
            "if" => Some(ImageFormat::ImageFile),
            "ff" => Some(ImageFormat::Farbfeld),
            _ => None
        }
    }

    /// The conventional file extension
    pub const fn extension(self) -> Option<&'static str> {
        match self {
            ImageFormat::ImageFile => Some("if"),
            ImageFormat::Farbfeld => Some("ff"),
            ImageFormat::PNG => Some("png"),
            ImageFormat::JPEG => Some("jpg"),
            ImageFormat::Unknown => None
        }
    }

    /// Layout pixels of this format decode to
    ///
    /// `None` for formats whose layout depends on the image
    pub const fn native_layout(self) -> Option<PixelLayout> {
        match self {
            ImageFormat::ImageFile => Some(imagefile::IMAGEFILE_LAYOUT),
            ImageFormat::Farbfeld => Some(farbfeld::FARBFELD_LAYOUT),
            ImageFormat::PNG | ImageFormat::JPEG | ImageFormat::Unknown => None
        }
    }

    pub const fn has_encoder(self) -> bool {
        matches!(self, ImageFormat::ImageFile | ImageFormat::Farbfeld)
    }

    /// Encode `source` in this format into `sink`
    ///
    /// Returns the number of bytes written
    pub fn encode<T, S>(self, sink: T, source: &S) -> Result<usize, ImageErrors>
    where
        T: ZByteWriterTrait,
        S: PixelSource + ?Sized
    {
        trace!("Encoding {:?} image", self);

        match self {
            ImageFormat::ImageFile => Ok(imagefile::encode(sink, source)?),
            ImageFormat::Farbfeld => Ok(farbfeld::encode(sink, source)?),
            ImageFormat::PNG | ImageFormat::JPEG | ImageFormat::Unknown => {
                Err(ImageErrors::NoEncoderForFormat(self))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rawimg_core::color::Color;
    use rawimg_core::pixels::{PixelBuffer, PixelLayout};

    use super::*;

    #[test]
    fn test_encode_dispatch() {
        let mut image = PixelBuffer::new(1, 1, PixelLayout::Gray8);
        image.set(0, 0, Color::Gray8(0xff));

        let mut out: Vec<u8> = vec![];
        assert_eq!(ImageFormat::ImageFile.encode(&mut out, &image).unwrap(), 21);
        assert_eq!(&out[..9], b"imagefile");

        let mut out: Vec<u8> = vec![];
        assert_eq!(ImageFormat::Farbfeld.encode(&mut out, &image).unwrap(), 24);
        assert_eq!(&out[16..], &[0xff; 8]);
    }

    #[test]
    fn test_unknown_has_no_encoder() {
        let image = PixelBuffer::new(1, 1, PixelLayout::Gray8);
        let mut out: Vec<u8> = vec![];

        assert!(!ImageFormat::Unknown.has_encoder());
        assert!(ImageFormat::Unknown.encode(&mut out, &image).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_decode_only_formats() {
        let image = PixelBuffer::new(1, 1, PixelLayout::Gray8);

        for format in [ImageFormat::PNG, ImageFormat::JPEG] {
            let mut out: Vec<u8> = vec![];

            assert!(!format.has_encoder());
            assert!(format.native_layout().is_none());
            assert!(matches!(
                format.encode(&mut out, &image),
                Err(ImageErrors::NoEncoderForFormat(_))
            ));
            // the extension names the format but never selects an encoder
            assert_eq!(ImageFormat::encoder_for_extension(format.extension().unwrap()), None);
        }
    }

    #[test]
    fn test_extension_round_trip() {
        for format in [ImageFormat::ImageFile, ImageFormat::Farbfeld] {
            let ext = format.extension().unwrap();
            assert_eq!(ImageFormat::encoder_for_extension(ext), Some(format));
        }
    }
}
