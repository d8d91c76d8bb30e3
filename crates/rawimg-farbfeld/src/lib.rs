/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! farbfeld is a lossless image format which is easy to parse, pipe and compress. It has the following format:
//! ```text
//! ╔════════╤═════════════════════════════════════════════════════════╗
//! ║ Bytes  │ Description                                             ║
//! ╠════════╪═════════════════════════════════════════════════════════╣
//! ║ 8      │ "farbfeld" magic value                                  ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit BE unsigned integer (width)                      ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit BE unsigned integer (height)                     ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ [2222] │ 4x16-Bit BE unsigned integers [RGBA] / pixel, row-major ║
//! ╚════════╧═════════════════════════════════════════════════════════╝
//! The RGB-data should be sRGB for best interoperability and not alpha-premultiplied.
//!```
//!
//! Decoded pixels use the [`Nrgba16`](rawimg_core::pixels::PixelLayout::Nrgba16) layout,
//! which keeps samples big endian, so both directions are plain byte copies for
//! native buffers.
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use rawimg_core;

mod decoder;
mod encoder;
mod errors;

use rawimg_core::header::MagicHeader;
use rawimg_core::pixels::PixelLayout;

/// The farbfeld header, `"farbfeld"` followed by width and height
pub const FARBFELD_HEADER: MagicHeader = MagicHeader::new(b"farbfeld");

/// Layout of decoded pixels, and the layout the encoder copies without conversion
pub const FARBFELD_LAYOUT: PixelLayout = PixelLayout::Nrgba16;
