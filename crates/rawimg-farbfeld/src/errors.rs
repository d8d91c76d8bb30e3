/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use rawimg_core::bytestream::ZByteIoError;

/// Errors possible during decoding
pub enum FarbFeldErrors {
    /// Farbfeld magic bytes not found, strict mode only
    WrongMagicBytes,
    /// Dimension name, value in the header, configured maximum
    TooLargeDimensions(&'static str, usize, usize),
    Generic(&'static str),
    IoError(ZByteIoError)
}

impl FarbFeldErrors {
    /// Returns true if decoding failed because the stream ended early
    pub const fn is_unexpected_eof(&self) -> bool {
        match self {
            FarbFeldErrors::IoError(err) => err.is_unexpected_eof(),
            _ => false
        }
    }
}

impl Debug for FarbFeldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            FarbFeldErrors::WrongMagicBytes => {
                write!(f, "Farbfeld magic bytes not found")
            }
            FarbFeldErrors::TooLargeDimensions(name, found, max) => {
                write!(
                    f,
                    "Image {name} {found} greater than max configured {name} {max}"
                )
            }
            FarbFeldErrors::Generic(e) => {
                write!(f, "Generic: {e}")
            }
            FarbFeldErrors::IoError(e) => {
                write!(f, "IO error: {:?}", e)
            }
        }
    }
}

impl Display for FarbFeldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for FarbFeldErrors {}

impl From<ZByteIoError> for FarbFeldErrors {
    fn from(value: ZByteIoError) -> Self {
        FarbFeldErrors::IoError(value)
    }
}

impl From<&'static str> for FarbFeldErrors {
    fn from(value: &'static str) -> Self {
        FarbFeldErrors::Generic(value)
    }
}

/// Errors possible during encoding
pub enum FarbFeldEncoderErrors {
    /// Too large dimensions, above 2^32.
    /// Farbfeld uses 4 bytes for width and height, if image cannot fit in it
    /// then it's undefined
    TooLargeDimensions(usize),
    IOErrors(ZByteIoError)
}

impl Debug for FarbFeldEncoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            FarbFeldEncoderErrors::TooLargeDimensions(dims) => {
                write!(f, "Too large dimensions {dims}")
            }
            FarbFeldEncoderErrors::IOErrors(err) => {
                write!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for FarbFeldEncoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for FarbFeldEncoderErrors {}

impl From<ZByteIoError> for FarbFeldEncoderErrors {
    fn from(value: ZByteIoError) -> Self {
        FarbFeldEncoderErrors::IOErrors(value)
    }
}
