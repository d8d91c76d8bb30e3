/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Per pixel color values and conversions between them
//!
//! Every color can report itself as 16 bit premultiplied `(r, g, b, a)`
//! samples held in [`u32`]s, each in the range `0..=0xffff`.
//! All conversions go through that intermediate, so converting from
//! any color to any other is two steps at most.
//!
//!  # Algorithm
//! - 8 bit samples widen to 16 bit by replicating the byte, `v * 0x101`,
//!   so `0xff` maps to `0xffff` exactly.
//! - Premultiplying is `c * a / 0xffff`.
//! - Un-premultiplying is `c * 0xffff / a`, see [`unpremultiply`].
//! - Narrowing back to 8 bits keeps the high byte.

/// Maximum value of a 16 bit sample, also the opaque alpha value
pub const MAX_16: u32 = 0xffff;

/// A single pixel in one of the supported representations.
///
/// Variants prefixed with `N` hold straight (non-premultiplied) alpha,
/// `Rgba8` and `Rgba16` hold premultiplied alpha.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Color {
    /// 8 bit premultiplied red, green, blue, alpha
    Rgba8([u8; 4]),
    /// 8 bit straight red, green, blue, alpha
    Nrgba8([u8; 4]),
    /// 16 bit premultiplied red, green, blue, alpha
    Rgba16([u16; 4]),
    /// 16 bit straight red, green, blue, alpha
    Nrgba16([u16; 4]),
    /// 8 bit opaque gray
    Gray8(u8),
    /// 16 bit opaque gray
    Gray16(u16)
}

impl Color {
    /// Fully transparent black
    pub const TRANSPARENT: Color = Color::Rgba16([0; 4]);

    /// Return the color as 16 bit premultiplied samples
    ///
    /// # Example
    /// ```
    /// use rawimg_core::color::Color;
    /// assert_eq!(Color::Gray8(0xff).rgba16_premultiplied(), [0xffff; 4]);
    /// assert_eq!(Color::Nrgba8([0xff, 0, 0, 0]).rgba16_premultiplied(), [0; 4]);
    /// ```
    pub const fn rgba16_premultiplied(self) -> [u32; 4] {
        match self {
            Color::Rgba8([r, g, b, a]) => [
                widen(r) as u32,
                widen(g) as u32,
                widen(b) as u32,
                widen(a) as u32
            ],
            Color::Nrgba8([r, g, b, a]) => {
                let a = widen(a) as u32;
                [
                    premultiply(widen(r) as u32, a),
                    premultiply(widen(g) as u32, a),
                    premultiply(widen(b) as u32, a),
                    a
                ]
            }
            Color::Rgba16([r, g, b, a]) => [r as u32, g as u32, b as u32, a as u32],
            Color::Nrgba16([r, g, b, a]) => {
                let a = a as u32;
                [
                    premultiply(r as u32, a),
                    premultiply(g as u32, a),
                    premultiply(b as u32, a),
                    a
                ]
            }
            Color::Gray8(y) => {
                let y = widen(y) as u32;
                [y, y, y, MAX_16]
            }
            Color::Gray16(y) => {
                let y = y as u32;
                [y, y, y, MAX_16]
            }
        }
    }

    /// Convert to 16 bit straight alpha samples
    ///
    /// Straight alpha inputs are widened sample by sample, without a
    /// premultiplied round trip, so transparent colors keep their values.
    pub const fn to_nrgba16(self) -> [u16; 4] {
        match self {
            Color::Nrgba16(c) => c,
            Color::Nrgba8([r, g, b, a]) => [widen(r), widen(g), widen(b), widen(a)],
            _ => {
                let [r, g, b, a] = self.rgba16_premultiplied();
                unpremultiply(r, g, b, a)
            }
        }
    }

    /// Convert to 8 bit straight alpha samples
    ///
    /// This is the imagefile pixel layout.
    pub const fn to_nrgba8(self) -> [u8; 4] {
        if let Color::Nrgba8(c) = self {
            return c;
        }
        // straight 16 bit samples come back from to_nrgba16 untouched
        let [r, g, b, a] = self.to_nrgba16();
        [narrow(r), narrow(g), narrow(b), narrow(a)]
    }

    /// Convert to 16 bit premultiplied samples
    pub const fn to_rgba16(self) -> [u16; 4] {
        let [r, g, b, a] = self.rgba16_premultiplied();
        [r as u16, g as u16, b as u16, a as u16]
    }

    /// Convert to 8 bit premultiplied samples
    pub const fn to_rgba8(self) -> [u8; 4] {
        let [r, g, b, a] = self.to_rgba16();
        [narrow(r), narrow(g), narrow(b), narrow(a)]
    }

    /// Convert to a 16 bit luma value
    ///
    /// Uses the premultiplied samples and the weights `19595 R + 38470 G + 7471 B`,
    /// which add up to `65536`. Alpha is dropped.
    pub const fn to_gray16(self) -> u16 {
        let [r, g, b, _] = self.rgba16_premultiplied();
        (luma_sum(r, g, b) >> 16) as u16
    }

    /// Convert to an 8 bit luma value, see [`to_gray16`](Self::to_gray16)
    pub const fn to_gray8(self) -> u8 {
        let [r, g, b, _] = self.rgba16_premultiplied();
        (luma_sum(r, g, b) >> 24) as u8
    }
}

#[inline(always)]
const fn widen(v: u8) -> u16 {
    (v as u16) * 0x101
}

#[inline(always)]
const fn narrow(v: u16) -> u8 {
    (v >> 8) as u8
}

#[inline(always)]
const fn premultiply(color: u32, alpha: u32) -> u32 {
    color * alpha / MAX_16
}

#[inline(always)]
const fn luma_sum(r: u32, g: u32, b: u32) -> u32 {
    19595 * r + 38470 * g + 7471 * b + (1 << 15)
}

/// Undo alpha premultiplication on 16 bit samples.
///
/// Inputs are premultiplied samples in `0..=0xffff` (wider values are
/// clamped first), output is straight alpha `[r, g, b, a]`.
///
/// - `a == 0`: the color is unrecoverable, returns `[0, 0, 0, 0]`
/// - `a == 0xffff`: samples are returned unchanged
/// - otherwise each color sample becomes `c * 0xffff / a` (truncating),
///   saturating at `0xffff` for inputs that were not validly
///   premultiplied (`c > a`)
///
/// # Example
/// ```
/// use rawimg_core::color::unpremultiply;
///
/// assert_eq!(unpremultiply(0x1234, 0x10, 0xffff, 0), [0, 0, 0, 0]);
/// assert_eq!(unpremultiply(0x1234, 0x10, 0xffff, 0xffff), [0x1234, 0x10, 0xffff, 0xffff]);
/// assert_eq!(unpremultiply(0x4000, 0x8000, 0, 0x8000), [0x7fff, 0xffff, 0, 0x8000]);
/// ```
pub const fn unpremultiply(r: u32, g: u32, b: u32, a: u32) -> [u16; 4] {
    let a = clamp16(a);

    if a == MAX_16 {
        return [clamp16(r) as u16, clamp16(g) as u16, clamp16(b) as u16, a as u16];
    }
    if a == 0 {
        return [0; 4];
    }
    [
        unpremultiply_sample(r, a),
        unpremultiply_sample(g, a),
        unpremultiply_sample(b, a),
        a as u16
    ]
}

#[inline(always)]
const fn clamp16(v: u32) -> u32 {
    if v > MAX_16 {
        MAX_16
    } else {
        v
    }
}

#[inline(always)]
const fn unpremultiply_sample(color: u32, alpha: u32) -> u16 {
    // color <= 0xffff so the product fits in a u32
    clamp16(clamp16(color) * MAX_16 / alpha) as u16
}
