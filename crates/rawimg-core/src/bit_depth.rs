/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image bit depth information

/// The image bit depth.
///
/// Both formats handled by the workspace store whole bytes per
/// sample, so only eight and sixteen bit depths exist.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum BitDepth {
    /// Eight bit depth.
    ///
    /// Images with such bit depth use [`u8`] to store
    /// pixels and use the whole range from 0-255.
    ///
    /// This is the imagefile depth.
    Eight,
    /// Sixteen bit depth
    ///
    /// Images with such bit depths use [`u16`] to store values and use the whole range
    /// i.e 0-65535
    ///
    /// Samples are kept big endian in buffers, matching farbfeld.
    Sixteen,
    /// Bit depth information is unknown
    #[default]
    Unknown
}

impl BitDepth {
    /// Get the max value supported by the bit depth
    pub const fn max_value(self) -> u16 {
        match self {
            Self::Eight => (1 << 8) - 1,
            Self::Sixteen => u16::MAX,
            Self::Unknown => 0
        }
    }

    /// Get the number of bytes needed to store a single sample
    ///
    /// # Example
    /// ```
    /// use rawimg_core::bit_depth::BitDepth;
    /// assert_eq!(BitDepth::Sixteen.size_of(), 2);
    /// assert_eq!(BitDepth::Unknown.size_of(), 0);
    /// ```
    pub const fn size_of(self) -> usize {
        match self {
            Self::Eight => 1,
            Self::Sixteen => 2,
            Self::Unknown => 0
        }
    }
}
