/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "jpeg")]

//! JPEG decoding through zune-jpeg
//!
//! Color images are converted to RGBA by the decoder, grayscale images
//! stay gray.
use std::io::Read;

use rawimg_core::header::Dimensions;
use rawimg_core::options::DecoderOptions;
use rawimg_core::pixels::{PixelBuffer, PixelLayout};
use zune_core::bytestream::ZCursor;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions as ZuneDecoderOptions;
pub use zune_jpeg::JpegDecoder;

use crate::codecs::samples::{dimensions, from_u8, layout_for, read_input, zune_options};
use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;
use crate::registry::{register_format, FormatEntry};

/// Registry entry for JPEG, the start of image marker
pub const ENTRY: FormatEntry = FormatEntry {
    format:        ImageFormat::JPEG,
    name:          "jpeg",
    pattern:       b"\xff\xd8",
    decode:        decode_image,
    decode_header: decode_dimensions
};

/// Add JPEG to the process wide registry
pub fn register() {
    register_format(ENTRY);
}

fn jpeg_options(options: &DecoderOptions) -> ZuneDecoderOptions {
    zune_options(options).jpeg_set_out_colorspace(ColorSpace::RGBA)
}

fn decode_image(reader: &mut dyn Read, options: DecoderOptions) -> Result<PixelBuffer, ImageErrors> {
    let data = read_input(reader)?;
    let mut decoder = JpegDecoder::new_with_options(ZCursor::new(data.as_slice()), jpeg_options(&options));

    let samples = decoder.decode()?;

    let (width, height) = decoder.dimensions().ok_or("JPEG headers not decoded")?;
    let colorspace = decoder
        .output_colorspace()
        .ok_or("JPEG headers not decoded")?;

    from_u8(width, height, colorspace, samples)
}

fn decode_dimensions(
    reader: &mut dyn Read, options: DecoderOptions
) -> Result<(Dimensions, PixelLayout), ImageErrors> {
    let data = read_input(reader)?;
    let mut decoder = JpegDecoder::new_with_options(ZCursor::new(data.as_slice()), jpeg_options(&options));

    decoder.decode_headers()?;

    let (width, height) = decoder.dimensions().ok_or("JPEG headers not decoded")?;
    let colorspace = decoder
        .output_colorspace()
        .ok_or("JPEG headers not decoded")?;

    Ok((dimensions(width, height)?, layout_for(colorspace, false)?))
}
