/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Read;

use rawimg_core::header::Dimensions;
use rawimg_core::options::DecoderOptions;
use rawimg_core::pixels::{PixelBuffer, PixelLayout};
pub use rawimg_farbfeld::*;

use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;
use crate::registry::{register_format, FormatEntry};

pub const ENTRY: FormatEntry = FormatEntry {
    format:        ImageFormat::Farbfeld,
    name:          "farbfeld",
    pattern:       b"farbfeld????????",
    decode:        decode_image,
    decode_header: decode_dimensions
};

/// Add farbfeld to the process wide registry
pub fn register() {
    register_format(ENTRY);
}

fn decode_image(reader: &mut dyn Read, options: DecoderOptions) -> Result<PixelBuffer, ImageErrors> {
    Ok(FarbFeldDecoder::new_with_options(reader, options).decode()?)
}

fn decode_dimensions(
    reader: &mut dyn Read, options: DecoderOptions
) -> Result<(Dimensions, PixelLayout), ImageErrors> {
    Ok((decode_header_with_options(reader, options)?, FARBFELD_LAYOUT))
}
