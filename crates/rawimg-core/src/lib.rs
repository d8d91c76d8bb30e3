/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the rawimg codecs
//!
//! This crate provides the pieces both the imagefile and the
//! farbfeld codecs build on
//!
//! It currently contains
//!
//! - A bytestream reader and writer with endian aware reads and writes
//! - Colorspace and bit depth information shared by images
//! - A color model with premultiplied/straight alpha conversions
//! - Pixel buffers, borrowed sub-image views and the [`PixelSource`](source::PixelSource) trait
//! - Fixed size header helpers shared by both formats
//! - Decoder options
//!
//! # Features
//!  - `log`: Route the crate's log macros to the [`log`](https://docs.rs/log) crate.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![macro_use]

pub mod bit_depth;
pub mod bytestream;
pub mod color;
pub mod colorspace;
pub mod header;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;
pub mod pixels;
pub mod serde;
pub mod source;

#[cfg(feature = "log")]
pub use log;
