/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for the imagefile format
use rawimg_core::bytestream::{ZByteWriterTrait, ZWriter};
use rawimg_core::header::Dimensions;
use rawimg_core::log::trace;
use rawimg_core::source::PixelSource;

use crate::errors::ImageFileEncodeErrors;
use crate::{IMAGEFILE_HEADER, IMAGEFILE_LAYOUT};

/// An imagefile encoder
///
/// Sources stored as [`Nrgba8`](rawimg_core::pixels::PixelLayout::Nrgba8)
/// are copied row by row, everything else is converted pixel by pixel.
/// Premultiplied sources are un-premultiplied on the way, which is lossy.
///
/// # Example
/// - Encode the middle of a 4 by 4 image
/// ```
/// use rawimg_core::pixels::{PixelBuffer, PixelLayout, Rect};
/// use rawimg_imagefile::ImageFileEncoder;
///
/// let image = PixelBuffer::new(4, 4, PixelLayout::Nrgba8);
/// let middle = image.sub_image(Rect::new(1, 1, 3, 3));
///
/// let mut sink: Vec<u8> = vec![];
/// let written = ImageFileEncoder::new(&middle).encode(&mut sink).unwrap();
/// assert_eq!(written, 17 + 2 * 2 * 4);
/// ```
pub struct ImageFileEncoder<'a, S: PixelSource + ?Sized> {
    source: &'a S
}

impl<'a, S: PixelSource + ?Sized> ImageFileEncoder<'a, S> {
    /// Create a new encoder which will encode `source`
    pub fn new(source: &'a S) -> ImageFileEncoder<'a, S> {
        ImageFileEncoder { source }
    }

    /// Return the exact size of the encoded image
    ///
    /// Saturates at `usize::MAX` for sources too large to encode
    pub fn max_size(&self) -> usize {
        let bounds = self.source.bounds();

        bounds
            .width()
            .saturating_mul(bounds.height())
            .saturating_mul(IMAGEFILE_LAYOUT.bytes_per_pixel())
            .saturating_add(IMAGEFILE_HEADER.size())
    }

    fn encode_headers<T: ZByteWriterTrait>(
        &self, stream: &mut ZWriter<T>
    ) -> Result<Dimensions, ImageFileEncodeErrors> {
        let dimensions = Dimensions::from_rect(self.source.bounds())
            .map_err(ImageFileEncodeErrors::TooLargeDimensions)?;

        IMAGEFILE_HEADER.write(stream, dimensions)?;

        Ok(dimensions)
    }

    /// Encode the source into `sink`
    ///
    /// # Returns
    /// - Ok(size): Number of bytes written, `17 + width * height * 4`
    /// - Err: The error encountered during encoding, the sink may hold
    ///   a partial image in that case
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, ImageFileEncodeErrors> {
        let bounds = self.source.bounds();
        let row_size = bounds
            .width()
            .checked_mul(IMAGEFILE_LAYOUT.bytes_per_pixel())
            .ok_or(ImageFileEncodeErrors::TooLargeDimensions(bounds.width()))?;

        let mut stream = ZWriter::new(sink);

        let dimensions = self.encode_headers(&mut stream)?;

        if let Some(rows) = self.source.native_rows(IMAGEFILE_LAYOUT) {
            trace!("Copying {}x{} pixels", dimensions.width, dimensions.height);

            for row in rows {
                stream.write_all(row)?;
            }
        } else {
            trace!("Converting {}x{} pixels", dimensions.width, dimensions.height);

            let mut row = vec![0; row_size];

            for y in bounds.min_y..bounds.max_y {
                let pixels = row.chunks_exact_mut(IMAGEFILE_LAYOUT.bytes_per_pixel());

                for (x, pixel) in (bounds.min_x..bounds.max_x).zip(pixels) {
                    pixel.copy_from_slice(&self.source.color_at(x, y).to_nrgba8());
                }
                stream.write_all(&row)?;
            }
        }
        stream.flush()?;

        Ok(stream.bytes_written())
    }
}

/// Encode `source` as an imagefile into `sink`
///
/// Shorthand for [`ImageFileEncoder::new`] followed by [`ImageFileEncoder::encode`]
pub fn encode<T: ZByteWriterTrait, S: PixelSource + ?Sized>(
    sink: T, source: &S
) -> Result<usize, ImageFileEncodeErrors> {
    ImageFileEncoder::new(source).encode(sink)
}
