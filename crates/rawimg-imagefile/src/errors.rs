/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding.
use core::fmt::{Debug, Display, Formatter};

use rawimg_core::bytestream::ZByteIoError;

/// Possible Errors that may occur during decoding
pub enum ImageFileErrors {
    /// The image does not start with `imagefile`.
    ///
    /// Only reported when the decoder is in strict mode
    WrongMagicBytes,
    /// The image is larger than the configured limits,
    /// or too large to be held in memory
    ///
    /// # Arguments
    /// - 1st argument is the dimension name
    /// - 2nd argument is the value found in the header
    /// - 3rd argument is the configured maximum
    TooLargeDimensions(&'static str, usize, usize),
    /// Generic message
    Generic(&'static str),
    /// Reading from the underlying stream failed,
    /// including the stream ending before the image did
    IoErrors(ZByteIoError)
}

impl ImageFileErrors {
    /// Returns true if decoding failed because the stream ended early
    pub const fn is_unexpected_eof(&self) -> bool {
        match self {
            ImageFileErrors::IoErrors(err) => err.is_unexpected_eof(),
            _ => false
        }
    }
}

impl Debug for ImageFileErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ImageFileErrors::WrongMagicBytes => {
                write!(f, "Wrong magic bytes, expected `imagefile` as image start")
            }
            ImageFileErrors::TooLargeDimensions(name, found, max) => {
                write!(
                    f,
                    "Image {name} {found} greater than max configured {name} {max}"
                )
            }
            ImageFileErrors::Generic(val) => {
                write!(f, "{val}")
            }
            ImageFileErrors::IoErrors(err) => {
                write!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for ImageFileErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageFileErrors {}

impl From<&'static str> for ImageFileErrors {
    fn from(r: &'static str) -> Self {
        Self::Generic(r)
    }
}

impl From<ZByteIoError> for ImageFileErrors {
    fn from(value: ZByteIoError) -> Self {
        ImageFileErrors::IoErrors(value)
    }
}

/// Errors encountered during encoding
pub enum ImageFileEncodeErrors {
    /// Too large dimensions
    ///
    /// imagefile stores width and height in 4 bytes each,
    /// a source larger than that cannot be represented
    TooLargeDimensions(usize),
    /// Writing to the sink failed
    IoErrors(ZByteIoError)
}

impl Debug for ImageFileEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ImageFileEncodeErrors::TooLargeDimensions(found) => {
                write!(
                    f,
                    "Too large image dimensions {found}, imagefile can only encode images less than {}",
                    u32::MAX
                )
            }
            ImageFileEncodeErrors::IoErrors(err) => {
                write!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for ImageFileEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageFileEncodeErrors {}

impl From<ZByteIoError> for ImageFileEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        ImageFileEncodeErrors::IoErrors(value)
    }
}
