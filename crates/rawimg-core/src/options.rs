/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! Not every option is respected by every decoder, each option lists the
//! decoders that respect it.

/// Decoder options
///
/// The defaults accept every image a header can describe and do not
/// validate the magic bytes, format dispatch already looked at them.
///
/// # Example
/// ```
/// use rawimg_core::options::DecoderOptions;
/// // refuse images larger than 1000 by 1000
/// let options = DecoderOptions::default()
///     .set_max_width(1000)
///     .set_max_height(1000)
///     .set_strict_mode(true);
///
/// assert_eq!(options.max_width(), 1000);
/// assert!(options.strict_mode());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: `u32::MAX`
    /// - Respected by: `all decoders`
    max_width:   usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: `u32::MAX`
    /// - Respected by: `all decoders`
    max_height:  usize,
    /// Whether decoders should reject a header whose
    /// magic bytes are not their own
    ///
    /// - Default value: false
    /// - Respected by: `all decoders`
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   u32::MAX as usize,
            max_height:  u32::MAX as usize,
            strict_mode: false
        }
    }
}

impl DecoderOptions {
    /// Create the default options
    pub fn new() -> DecoderOptions {
        DecoderOptions::default()
    }

    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// And reject magic bytes that do not belong to it
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should reject foreign magic bytes
    #[must_use]
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}
