/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image Colorspace information

/// Colorspaces a pixel buffer can be stored in.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ColorSpace {
    /// Red, Green, Blue, Alpha
    RGBA,
    /// Grayscale colorspace
    Luma,
    /// The colorspace is unknown
    Unknown
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGBA returns 4 since it contains R,G,B and A to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGBA => 4,
            Self::Luma => 1,
            Self::Unknown => 0
        }
    }

    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::RGBA)
    }

    pub const fn is_grayscale(&self) -> bool {
        matches!(self, Self::Luma)
    }

    /// Returns the position of the alpha sample in a pixel,
    /// or `None` if the colorspace has no alpha
    pub const fn alpha_position(&self) -> Option<usize> {
        match self {
            ColorSpace::RGBA => Some(3),
            _ => None
        }
    }
}
