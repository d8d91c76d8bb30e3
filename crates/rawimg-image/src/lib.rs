/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Format detection for the rawimg codecs
//!
//! Codecs are found by comparing the first bytes of a stream against
//! a table of header patterns, the table starts empty and is filled by
//! explicit registration.
//!
//! Besides imagefile and farbfeld the table can hold decode only PNG and
//! JPEG entries (features `png` and `jpeg`).
//!
//! # Example
//! ```
//! use rawimg_core::options::DecoderOptions;
//! use rawimg_image::codecs::ImageFormat;
//!
//! rawimg_image::registry::register_builtin_formats();
//!
//! let data = b"imagefile\0\0\0\x01\0\0\0\x01\x01\x02\x03\x04";
//! let (image, format) = rawimg_image::registry::decode(&data[..], DecoderOptions::default()).unwrap();
//!
//! assert_eq!(format, ImageFormat::ImageFile);
//! assert_eq!(image.pixels(), &[1, 2, 3, 4]);
//! ```
pub use rawimg_core;

pub mod codecs;
pub mod errors;
pub mod registry;
mod serde;
