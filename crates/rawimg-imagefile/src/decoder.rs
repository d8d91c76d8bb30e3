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

use crate::errors::ImageFileErrors;
use crate::{IMAGEFILE_HEADER, IMAGEFILE_LAYOUT};

/// An imagefile decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to read the dimensions
/// or [`decode`] to return the pixels
///
/// [`decode_headers`]:ImageFileDecoder::decode_headers
/// [`decode`]:ImageFileDecoder::decode
pub struct ImageFileDecoder<T>
where
    T: ZByteReaderTrait
{
    stream:     ZReader<T>,
    dimensions: Option<Dimensions>,
    options:    DecoderOptions
}

impl<T> ImageFileDecoder<T>
where
    T: ZByteReaderTrait
{
    /// Create a new decoder with the default options
    ///
    /// # Arguments
    /// - `data`: The source of imagefile bytes
    ///
    /// # Example
    /// ```no_run
    /// let mut decoder = rawimg_imagefile::ImageFileDecoder::new(std::io::stdin().lock());
    /// ```
    pub fn new(data: T) -> ImageFileDecoder<T> {
        ImageFileDecoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new decoder that obeys specified restrictions
    ///
    /// # Example
    /// ```
    /// use rawimg_core::options::DecoderOptions;
    /// use rawimg_imagefile::ImageFileDecoder;
    /// // only decode images less than 10 in both width and height
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = ImageFileDecoder::new_with_options(&b"imagefile\0\0\0\x0b\0\0\0\x01"[..], options);
    /// assert!(decoder.decode_headers().is_err());
    /// ```
    pub fn new_with_options(data: T, options: DecoderOptions) -> ImageFileDecoder<T> {
        ImageFileDecoder {
            stream: ZReader::new(data),
            dimensions: None,
            options
        }
    }

    /// Decode the header storing the dimensions into
    /// the decoder instance
    ///
    /// Calling it more than once does not consume more bytes.
    ///
    /// # Returns
    /// - On success: Nothing
    /// - On error: The error encountered when decoding headers,
    ///   a stream shorter than 17 bytes is an unexpected end of stream
    pub fn decode_headers(&mut self) -> Result<(), ImageFileErrors> {
        self.read_headers().map(|_| ())
    }

    fn read_headers(&mut self) -> Result<Dimensions, ImageFileErrors> {
        if let Some(dimensions) = self.dimensions {
            return Ok(dimensions);
        }
        let contents = IMAGEFILE_HEADER.read(&mut self.stream)?;

        if !contents.magic_matches {
            if self.options.strict_mode() {
                return Err(ImageFileErrors::WrongMagicBytes);
            }
            warn!("Magic bytes do not match `imagefile`, decoding anyway");
        }
        let dimensions = contents.dimensions;

        trace!("Image width: {}", dimensions.width);
        trace!("Image height: {}", dimensions.height);

        if dimensions.width as usize > self.options.max_width() {
            return Err(ImageFileErrors::TooLargeDimensions(
                "width",
                dimensions.width as usize,
                self.options.max_width()
            ));
        }
        if dimensions.height as usize > self.options.max_height() {
            return Err(ImageFileErrors::TooLargeDimensions(
                "height",
                dimensions.height as usize,
                self.options.max_height()
            ));
        }
        self.dimensions = Some(dimensions);

        Ok(dimensions)
    }

    /// Decode the image returning its pixels
    ///
    /// Pixels are stored in [`Nrgba8`](rawimg_core::pixels::PixelLayout::Nrgba8)
    /// layout with a tight stride.
    ///
    /// # Errors
    /// If the stream ends before the pixel data does, an unexpected end of stream error
    /// is returned and no pixels are handed out.
    pub fn decode(&mut self) -> Result<PixelBuffer, ImageFileErrors> {
        let dimensions = self.read_headers()?;
        let (width, height) = (dimensions.width as usize, dimensions.height as usize);

        let size = buffer_size(width, height).ok_or(ImageFileErrors::TooLargeDimensions(
            "size",
            width.saturating_mul(height),
            usize::MAX / IMAGEFILE_LAYOUT.bytes_per_pixel()
        ))?;

        // 4x8-Bit unsigned integers [RGBA] / pixel, row-major
        let pixels = self.stream.read_exact_vec(size)?;

        trace!("Read {} bytes of pixels", size);

        Ok(PixelBuffer::from_raw(width, height, IMAGEFILE_LAYOUT, pixels)?)
    }

    /// Return the number of bytes required to hold the decoded image
    ///
    /// # Returns
    ///  - `Some(usize)`: Size of the pixel section
    ///  - `None`: Headers were not decoded or the size does not fit a `usize`
    pub fn output_buffer_size(&self) -> Option<usize> {
        let dimensions = self.dimensions?;
        buffer_size(dimensions.width as usize, dimensions.height as usize)
    }

    /// Return the width and height of the image
    ///
    /// Or none if the headers haven't been decoded
    pub const fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }

    /// Returns imagefile colorspace.
    ///
    /// This is always RGBA
    pub const fn colorspace(&self) -> ColorSpace {
        IMAGEFILE_LAYOUT.colorspace()
    }

    /// Return imagefile bit depth
    ///
    /// This is always 8
    pub const fn bit_depth(&self) -> BitDepth {
        IMAGEFILE_LAYOUT.bit_depth()
    }

    /// Destroy the decoder returning the underlying reader,
    /// positioned after whatever was decoded
    pub fn into_inner(self) -> T {
        self.stream.consume()
    }
}

fn buffer_size(width: usize, height: usize) -> Option<usize> {
    width
        .checked_mul(height)?
        .checked_mul(IMAGEFILE_LAYOUT.bytes_per_pixel())
}

/// Decode an imagefile from `reader`
///
/// Shorthand for [`ImageFileDecoder::new`] followed by [`ImageFileDecoder::decode`]
pub fn decode<T: ZByteReaderTrait>(reader: T) -> Result<PixelBuffer, ImageFileErrors> {
    ImageFileDecoder::new(reader).decode()
}

/// Read only the header of an imagefile from `reader`
///
/// Consumes exactly 17 bytes on success.
pub fn decode_header<T: ZByteReaderTrait>(reader: T) -> Result<Dimensions, ImageFileErrors> {
    decode_header_with_options(reader, DecoderOptions::default())
}

/// Read only the header, applying the limits in `options`
pub fn decode_header_with_options<T: ZByteReaderTrait>(
    reader: T, options: DecoderOptions
) -> Result<Dimensions, ImageFileErrors> {
    ImageFileDecoder::new_with_options(reader, options).read_headers()
}
