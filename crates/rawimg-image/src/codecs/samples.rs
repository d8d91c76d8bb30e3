/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(any(feature = "png", feature = "jpeg"))]

//! Glue between the zune decoders and [`PixelBuffer`]
//!
//! The zune decoders return interleaved samples in one of several
//! colorspaces. Gray images keep a gray layout, everything else is
//! expanded to straight alpha RGBA, 16 bit samples are stored big endian.
use std::io::Read;

use rawimg_core::bytestream::ZByteIoError;
use rawimg_core::header::Dimensions;
use rawimg_core::options::DecoderOptions;
use rawimg_core::pixels::{PixelBuffer, PixelLayout};
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions as ZuneDecoderOptions;

use crate::errors::ImageErrors;

/// Read the rest of `reader` into memory
///
/// The zune decoders work on complete buffers, memory use is bounded
/// by the size of the input.
pub(crate) fn read_input(reader: &mut dyn Read) -> Result<Vec<u8>, ImageErrors> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(ZByteIoError::from)?;
    Ok(data)
}

/// Carry dimension limits and strictness over to the zune decoders
pub(crate) fn zune_options(options: &DecoderOptions) -> ZuneDecoderOptions {
    ZuneDecoderOptions::default()
        .set_max_width(options.max_width())
        .set_max_height(options.max_height())
        .set_strict_mode(options.strict_mode())
}

pub(crate) fn dimensions(width: usize, height: usize) -> Result<Dimensions, ImageErrors> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(width), Ok(height)) => Ok(Dimensions::new(width, height)),
        _ => Err(ImageErrors::ImageDecodeErrors(format!(
            "Dimensions {width}x{height} do not fit in 32 bits"
        )))
    }
}

/// Layout samples of `colorspace` are stored in
pub(crate) fn layout_for(colorspace: ColorSpace, sixteen_bit: bool) -> Result<PixelLayout, ImageErrors> {
    match colorspace {
        ColorSpace::Luma if sixteen_bit => Ok(PixelLayout::Gray16),
        ColorSpace::Luma => Ok(PixelLayout::Gray8),
        ColorSpace::LumaA | ColorSpace::RGB | ColorSpace::RGBA if sixteen_bit => {
            Ok(PixelLayout::Nrgba16)
        }
        ColorSpace::LumaA | ColorSpace::RGB | ColorSpace::RGBA => Ok(PixelLayout::Nrgba8),
        other => Err(ImageErrors::ImageDecodeErrors(format!(
            "Unsupported colorspace {other:?}"
        )))
    }
}

/// Build a buffer from interleaved 8 bit samples
pub(crate) fn from_u8(
    width: usize, height: usize, colorspace: ColorSpace, samples: Vec<u8>
) -> Result<PixelBuffer, ImageErrors> {
    let layout = layout_for(colorspace, false)?;
    let pixels = match colorspace {
        ColorSpace::Luma | ColorSpace::RGBA => samples,
        _ => expand_to_rgba(colorspace, &samples, u8::MAX)
    };
    Ok(PixelBuffer::from_raw(width, height, layout, pixels)?)
}

/// Build a buffer from interleaved native endian 16 bit samples
pub(crate) fn from_u16(
    width: usize, height: usize, colorspace: ColorSpace, samples: Vec<u16>
) -> Result<PixelBuffer, ImageErrors> {
    let layout = layout_for(colorspace, true)?;
    let samples = match colorspace {
        ColorSpace::Luma | ColorSpace::RGBA => samples,
        _ => expand_to_rgba(colorspace, &samples, u16::MAX)
    };
    let pixels = samples.iter().flat_map(|v| v.to_be_bytes()).collect();

    Ok(PixelBuffer::from_raw(width, height, layout, pixels)?)
}

fn expand_to_rgba<T: Copy>(colorspace: ColorSpace, samples: &[T], opaque: T) -> Vec<T> {
    let components = colorspace.num_components();
    let mut out = Vec::with_capacity(samples.len() / components * 4);

    for pixel in samples.chunks_exact(components) {
        match *pixel {
            [y] => out.extend_from_slice(&[y, y, y, opaque]),
            [y, a] => out.extend_from_slice(&[y, y, y, a]),
            [r, g, b] => out.extend_from_slice(&[r, g, b, opaque]),
            [r, g, b, a, ..] => out.extend_from_slice(&[r, g, b, a]),
            [] => {}
        }
    }
    out
}
