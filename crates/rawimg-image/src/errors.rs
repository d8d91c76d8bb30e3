/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors returned by the registry and the format dispatch
use core::fmt::{Debug, Display, Formatter};

use rawimg_core::bytestream::ZByteIoError;
use rawimg_farbfeld::{FarbFeldEncoderErrors, FarbFeldErrors};
use rawimg_imagefile::{ImageFileEncodeErrors, ImageFileErrors};

use crate::codecs::ImageFormat;

/// All possible image errors that can occur.
pub enum ImageErrors {
    /// No registered format matches the start of the stream
    UnknownFormat,
    ImageFile(ImageFileErrors),
    FarbFeld(FarbFeldErrors),
    /// Errors from the PNG and JPEG decoders, or malformed decoder output
    ImageDecodeErrors(String),
    /// Reading the format prefix failed
    IoErrors(ZByteIoError),
    /// The format has no encoder
    NoEncoderForFormat(ImageFormat),
    EncodeErrors(String)
}

impl ImageErrors {
    /// Returns true if the stream ended before the image did
    pub const fn is_unexpected_eof(&self) -> bool {
        match self {
            ImageErrors::ImageFile(err) => err.is_unexpected_eof(),
            ImageErrors::FarbFeld(err) => err.is_unexpected_eof(),
            ImageErrors::IoErrors(err) => err.is_unexpected_eof(),
            _ => false
        }
    }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownFormat => {
                write!(f, "Unknown image format")
            }
            Self::ImageFile(err) => {
                write!(f, "imagefile decoding failed: {:?}", err)
            }
            Self::FarbFeld(err) => {
                write!(f, "farbfeld decoding failed: {:?}", err)
            }
            Self::ImageDecodeErrors(err) => {
                write!(f, "Decoding failed: {err}")
            }
            Self::IoErrors(err) => {
                write!(f, "I/O error: {:?}", err)
            }
            Self::NoEncoderForFormat(format) => {
                write!(f, "No encoder for format {:?}", format)
            }
            Self::EncodeErrors(err) => {
                write!(f, "Encoding failed: {err}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageErrors {}

impl From<ImageFileErrors> for ImageErrors {
    fn from(from: ImageFileErrors) -> Self {
        ImageErrors::ImageFile(from)
    }
}

impl From<FarbFeldErrors> for ImageErrors {
    fn from(from: FarbFeldErrors) -> Self {
        ImageErrors::FarbFeld(from)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(from: &'static str) -> Self {
        ImageErrors::ImageDecodeErrors(from.to_string())
    }
}

#[cfg(feature = "png")]
impl From<zune_png::error::PngDecodeErrors> for ImageErrors {
    fn from(from: zune_png::error::PngDecodeErrors) -> Self {
        ImageErrors::ImageDecodeErrors(format!("png: {:?}", from))
    }
}

#[cfg(feature = "jpeg")]
impl From<zune_jpeg::errors::DecodeErrors> for ImageErrors {
    fn from(from: zune_jpeg::errors::DecodeErrors) -> Self {
        ImageErrors::ImageDecodeErrors(format!("jpeg: {:?}", from))
    }
}

impl From<ZByteIoError> for ImageErrors {
    fn from(from: ZByteIoError) -> Self {
        ImageErrors::IoErrors(from)
    }
}

impl From<ImageFileEncodeErrors> for ImageErrors {
    fn from(from: ImageFileEncodeErrors) -> Self {
        ImageErrors::EncodeErrors(format!("imagefile: {:?}", from))
    }
}

impl From<FarbFeldEncoderErrors> for ImageErrors {
    fn from(from: FarbFeldEncoderErrors) -> Self {
        ImageErrors::EncodeErrors(format!("farbfeld: {:?}", from))
    }
}
