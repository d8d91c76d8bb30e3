/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for Farbfeld image format
use rawimg_core::bytestream::{ZByteWriterTrait, ZWriter};
use rawimg_core::header::Dimensions;
use rawimg_core::log::trace;
use rawimg_core::source::PixelSource;

use crate::errors::FarbFeldEncoderErrors;
use crate::{FARBFELD_HEADER, FARBFELD_LAYOUT};

/// A FarbFeld encoder
///
/// The encoder's entry point is `new` which initializes the encoder
///
/// # NOTE.
///
/// Sources in [`Nrgba16`](rawimg_core::pixels::PixelLayout::Nrgba16) layout
/// already hold big endian samples and are written as is, any other source
/// is widened/un-premultiplied one pixel at a time.
///
/// # Example
/// - Encodes a 10 by 4 RGBA image
/// ```
/// use rawimg_core::pixels::{PixelBuffer, PixelLayout};
/// use rawimg_farbfeld::FarbFeldEncoder;
///
/// let image = PixelBuffer::new(10, 4, PixelLayout::Nrgba8);
///
/// let mut write_to: Vec<u8> = vec![];
/// FarbFeldEncoder::new(&image).encode(&mut write_to).unwrap();
/// assert_eq!(write_to.len(), 16 + 10 * 4 * 8);
/// ```
pub struct FarbFeldEncoder<'a, S: PixelSource + ?Sized> {
    source: &'a S
}

impl<'a, S: PixelSource + ?Sized> FarbFeldEncoder<'a, S> {
    /// Create a new encoder which will encode `source`
    pub fn new(source: &'a S) -> FarbFeldEncoder<'a, S> {
        FarbFeldEncoder { source }
    }

    /// Return the exact size of the encoded image, `16 + width * height * 8`
    pub fn max_size(&self) -> usize {
        let bounds = self.source.bounds();

        bounds
            .width()
            .saturating_mul(bounds.height())
            .saturating_mul(FARBFELD_LAYOUT.bytes_per_pixel())
            .saturating_add(FARBFELD_HEADER.size())
    }

    fn encode_headers<T: ZByteWriterTrait>(
        &self, stream: &mut ZWriter<T>
    ) -> Result<Dimensions, FarbFeldEncoderErrors> {
        let dimensions = Dimensions::from_rect(self.source.bounds())
            .map_err(FarbFeldEncoderErrors::TooLargeDimensions)?;

        FARBFELD_HEADER.write(stream, dimensions)?;

        Ok(dimensions)
    }

    /// Encode the contents returning the number of bytes written
    /// or an error if anything occurs
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, FarbFeldEncoderErrors> {
        let bounds = self.source.bounds();
        let bpp = FARBFELD_LAYOUT.bytes_per_pixel();

        let row_size = bounds
            .width()
            .checked_mul(bpp)
            .ok_or(FarbFeldEncoderErrors::TooLargeDimensions(bounds.width()))?;

        let mut stream = ZWriter::new(sink);

        self.encode_headers(&mut stream)?;

        match self.source.native_rows(FARBFELD_LAYOUT) {
            Some(rows) => {
                // big endian already, just copy bytes
                for row in rows {
                    stream.write_all(row)?;
                }
            }
            None => {
                trace!("Source is not NRGBA16, converting");

                let mut row = vec![0; row_size];

                for y in bounds.min_y..bounds.max_y {
                    for (x, pixel) in (bounds.min_x..bounds.max_x).zip(row.chunks_exact_mut(bpp)) {
                        let samples = self.source.color_at(x, y).to_nrgba16();

                        for (sample, bytes) in samples.iter().zip(pixel.chunks_exact_mut(2)) {
                            bytes.copy_from_slice(&sample.to_be_bytes());
                        }
                    }
                    stream.write_all(&row)?;
                }
            }
        }
        stream.flush()?;

        Ok(stream.bytes_written())
    }
}

/// Encode `source` as farbfeld into `sink`
pub fn encode<T: ZByteWriterTrait, S: PixelSource + ?Sized>(
    sink: T, source: &S
) -> Result<usize, FarbFeldEncoderErrors> {
    FarbFeldEncoder::new(source).encode(sink)
}
