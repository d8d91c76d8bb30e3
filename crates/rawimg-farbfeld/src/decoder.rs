/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use rawimg_core::bit_depth::BitDepth;
use rawimg_core::bytestream::{ZByteReaderTrait, ZReader};
use rawimg_core::colorspace::ColorSpace;
use rawimg_core::header::Dimensions;
use rawimg_core::log::{trace, warn};
use rawimg_core::options::DecoderOptions;
use rawimg_core::pixels::PixelBuffer;

use crate::errors::FarbFeldErrors;
use crate::{FARBFELD_HEADER, FARBFELD_LAYOUT};

/// A simple Farbfeld lossless decoder
pub struct FarbFeldDecoder<T: ZByteReaderTrait> {
    stream:     ZReader<T>,
    dimensions: Option<Dimensions>,
    options:    DecoderOptions
}

impl<T: ZByteReaderTrait> FarbFeldDecoder<T> {
    ///Create a new decoder.
    ///
    /// Data is the raw farbfeld stream
    pub fn new(data: T) -> FarbFeldDecoder<T> {
        Self::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new decoder with non default options as opposed to
    /// `new`
    pub fn new_with_options(data: T, options: DecoderOptions) -> FarbFeldDecoder<T> {
        FarbFeldDecoder {
            stream: ZReader::new(data),
            dimensions: None,
            options
        }
    }
    /// Decode a header for this specific image
    pub fn decode_headers(&mut self) -> Result<(), FarbFeldErrors> {
        self.read_headers()?;
        Ok(())
    }

    fn read_headers(&mut self) -> Result<Dimensions, FarbFeldErrors> {
        if let Some(dimensions) = self.dimensions {
            return Ok(dimensions);
        }
        // magic, 32 bit BE width, 32 bit BE height
        let header = FARBFELD_HEADER.read(&mut self.stream)?;

        if !header.magic_matches {
            if self.options.strict_mode() {
                return Err(FarbFeldErrors::WrongMagicBytes);
            }
            warn!("Farbfeld magic bytes not found, decoding anyway");
        }
        let Dimensions { width, height } = header.dimensions;

        trace!("Image width: {}", width);
        trace!("Image height: {}", height);

        if height as usize > self.options.max_height() {
            return Err(FarbFeldErrors::TooLargeDimensions(
                "height",
                height as usize,
                self.options.max_height()
            ));
        }
        if width as usize > self.options.max_width() {
            return Err(FarbFeldErrors::TooLargeDimensions(
                "width",
                width as usize,
                self.options.max_width()
            ));
        }

        self.dimensions = Some(header.dimensions);
        Ok(header.dimensions)
    }
    /// Decode farbfeld data returning the pixels or an error
    ///
    /// Samples stay big endian, exactly as they were in the stream.
    /// A failed decode never returns a partially filled buffer, and memory
    /// grows with the bytes actually present rather than the header's claim.
    pub fn decode(&mut self) -> Result<PixelBuffer, FarbFeldErrors> {
        let dimensions = self.read_headers()?;
        let width = dimensions.width as usize;
        let height = dimensions.height as usize;

        let size = calc_buffer_size(width, height).ok_or(FarbFeldErrors::TooLargeDimensions(
            "size",
            width.saturating_mul(height),
            usize::MAX / FARBFELD_LAYOUT.bytes_per_pixel()
        ))?;

        // 4x16-Bit BE unsigned integers [RGBA] / pixel, row-major
        let data = self.stream.read_exact_vec(size)?;

        Ok(PixelBuffer::from_raw(width, height, FARBFELD_LAYOUT, data)?)
    }

    /// Return the number of bytes required to hold the decoded pixels
    ///
    /// `None` if headers weren't decoded
    pub fn output_buffer_size(&self) -> Option<usize> {
        let dimensions = self.dimensions?;
        calc_buffer_size(dimensions.width as usize, dimensions.height as usize)
    }

    /// Returns farbfeld default image colorspace.
    ///
    /// This is always RGBA
    pub const fn colorspace(&self) -> ColorSpace {
        FARBFELD_LAYOUT.colorspace()
    }
    /// Return farbfeld default bit depth
    ///
    /// This is always 16
    pub const fn bit_depth(&self) -> BitDepth {
        FARBFELD_LAYOUT.bit_depth()
    }

    /// Return the width and height of the image
    pub const fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }

    /// Destroy the decoder returning the underlying reader
    pub fn into_inner(self) -> T {
        self.stream.consume()
    }
}

fn calc_buffer_size(width: usize, height: usize) -> Option<usize> {
    FARBFELD_LAYOUT
        .bytes_per_pixel()
        .checked_mul(width)?
        .checked_mul(height)
}

/// Decode a farbfeld image from `reader`
pub fn decode<T: ZByteReaderTrait>(reader: T) -> Result<PixelBuffer, FarbFeldErrors> {
    FarbFeldDecoder::new(reader).decode()
}

/// Read the 16 byte header and return the image dimensions
pub fn decode_header<T: ZByteReaderTrait>(reader: T) -> Result<Dimensions, FarbFeldErrors> {
    decode_header_with_options(reader, DecoderOptions::default())
}

/// Same as [`decode_header`] but with non default options
pub fn decode_header_with_options<T: ZByteReaderTrait>(
    reader: T, options: DecoderOptions
) -> Result<Dimensions, FarbFeldErrors> {
    FarbFeldDecoder::new_with_options(reader, options).read_headers()
}
