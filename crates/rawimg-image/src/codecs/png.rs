/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "png")]

//! PNG decoding through zune-png
//!
//! Palette images come out as RGB(A), 16 bit images keep their depth.
use std::io::Read;

use rawimg_core::header::Dimensions;
use rawimg_core::options::DecoderOptions;
use rawimg_core::pixels::{PixelBuffer, PixelLayout};
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZCursor;
use zune_core::result::DecodingResult;
pub use zune_png::PngDecoder;

use crate::codecs::samples::{dimensions, from_u16, from_u8, layout_for, read_input, zune_options};
use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;
use crate::registry::{register_format, FormatEntry};

/// Registry entry for PNG, the eight byte signature
pub const ENTRY: FormatEntry = FormatEntry {
    format:        ImageFormat::PNG,
    name:          "png",
    pattern:       b"\x89PNG\r\n\x1a\n",
    decode:        decode_image,
    decode_header: decode_dimensions
};

/// Add PNG to the process wide registry
pub fn register() {
    register_format(ENTRY);
}

fn decode_image(reader: &mut dyn Read, options: DecoderOptions) -> Result<PixelBuffer, ImageErrors> {
    let data = read_input(reader)?;
    let mut decoder = PngDecoder::new_with_options(ZCursor::new(data.as_slice()), zune_options(&options));

    decoder.decode_headers()?;

    let (width, height) = decoder.dimensions().ok_or("PNG headers not decoded")?;
    let colorspace = decoder.colorspace().ok_or("PNG headers not decoded")?;

    match decoder.decode()? {
        DecodingResult::U8(samples) => from_u8(width, height, colorspace, samples),
        DecodingResult::U16(samples) => from_u16(width, height, colorspace, samples),
        _ => Err(ImageErrors::ImageDecodeErrors(
            "Unsupported PNG sample type".to_string()
        ))
    }
}

fn decode_dimensions(
    reader: &mut dyn Read, options: DecoderOptions
) -> Result<(Dimensions, PixelLayout), ImageErrors> {
    let data = read_input(reader)?;
    let mut decoder = PngDecoder::new_with_options(ZCursor::new(data.as_slice()), zune_options(&options));

    decoder.decode_headers()?;

    let (width, height) = decoder.dimensions().ok_or("PNG headers not decoded")?;
    let colorspace = decoder.colorspace().ok_or("PNG headers not decoded")?;
    let sixteen_bit = matches!(decoder.depth(), Some(BitDepth::Sixteen));

    Ok((dimensions(width, height)?, layout_for(colorspace, sixteen_bit)?))
}
