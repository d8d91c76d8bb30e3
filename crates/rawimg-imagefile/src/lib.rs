/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! imagefile is a trivial uncompressed image format. It has the following format:
//! ```text
//! ╔════════╤═════════════════════════════════════════════════════════╗
//! ║ Bytes  │ Description                                             ║
//! ╠════════╪═════════════════════════════════════════════════════════╣
//! ║ 9      │ "imagefile" magic value                                 ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit BE unsigned integer (width)                      ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit BE unsigned integer (height)                     ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ [1111] │ 4x8-Bit unsigned integers [RGBA] / pixel, row-major     ║
//! ╚════════╧═════════════════════════════════════════════════════════╝
//! The RGB-data is not alpha-premultiplied.
//!```
//!
//! Images are decoded into a [`PixelBuffer`](rawimg_core::pixels::PixelBuffer) with the
//! [`Nrgba8`](rawimg_core::pixels::PixelLayout::Nrgba8) layout, anything implementing
//! [`PixelSource`](rawimg_core::source::PixelSource) can be encoded.
//!
//! # Example
//! ```
//! use rawimg_core::color::Color;
//! use rawimg_core::pixels::{PixelBuffer, PixelLayout};
//!
//! let mut image = PixelBuffer::new(2, 1, PixelLayout::Gray8);
//! image.set(1, 0, Color::Gray8(0xff));
//!
//! let mut encoded: Vec<u8> = vec![];
//! rawimg_imagefile::encode(&mut encoded, &image).unwrap();
//! assert_eq!(encoded.len(), 17 + 2 * 4);
//!
//! let decoded = rawimg_imagefile::decode(&encoded[..]).unwrap();
//! assert_eq!(decoded.pixels(), &[0, 0, 0, 0xff, 0xff, 0xff, 0xff, 0xff]);
//! ```
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use rawimg_core;

mod decoder;
mod encoder;
mod errors;

use rawimg_core::header::MagicHeader;
use rawimg_core::pixels::PixelLayout;

/// The imagefile header, `"imagefile"` followed by width and height
pub const IMAGEFILE_HEADER: MagicHeader = MagicHeader::new(b"imagefile");

/// Layout of decoded pixels, and the layout the encoder copies without conversion
pub const IMAGEFILE_LAYOUT: PixelLayout = PixelLayout::Nrgba8;
