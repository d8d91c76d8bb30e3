/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel buffers and borrowed views into them
//!
//! A [`PixelBuffer`] owns a flat byte vector laid out row by row, with
//! `stride` bytes between the start of two consecutive rows.
//! A [`PixelView`] borrows a rectangle of a parent buffer without
//! copying, it keeps the parent's stride so row boundaries of
//! the view are not contiguous in memory.
//!
//! 16 bit layouts store each sample big endian.
use crate::bit_depth::BitDepth;
use crate::color::Color;
use crate::colorspace::ColorSpace;
use crate::source::{NativeRows, PixelSource};

/// An axis aligned rectangle, `min` inclusive and `max` exclusive
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rect {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize
}

impl Rect {
    /// Create a rectangle from two corners.
    ///
    /// Corners are swapped where needed so that `min <= max`
    pub const fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Rect {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };

        Rect {
            min_x,
            min_y,
            max_x,
            max_y
        }
    }
    /// A rectangle anchored at the origin
    pub const fn from_dimensions(width: usize, height: usize) -> Rect {
        Rect::new(0, 0, width, height)
    }

    pub const fn width(&self) -> usize {
        self.max_x - self.min_x
    }

    pub const fn height(&self) -> usize {
        self.max_y - self.min_y
    }

    pub const fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        self.min_x <= x && x < self.max_x && self.min_y <= y && y < self.max_y
    }

    /// Largest rectangle contained by both.
    ///
    /// Returns the zero rectangle if they do not overlap
    #[must_use]
    pub fn intersect(&self, other: Rect) -> Rect {
        let r = Rect {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y)
        };
        if r.is_empty() {
            return Rect::default();
        }
        r
    }
}

/// Memory layout of a single pixel
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PixelLayout {
    /// 8 bit straight alpha RGBA, the imagefile layout
    Nrgba8,
    /// 16 bit big endian straight alpha RGBA, the farbfeld layout
    Nrgba16,
    /// 8 bit premultiplied RGBA
    Rgba8,
    /// 16 bit big endian premultiplied RGBA
    Rgba16,
    /// 8 bit gray
    Gray8,
    /// 16 bit big endian gray
    Gray16
}

impl PixelLayout {
    pub const fn bytes_per_pixel(self) -> usize {
        self.colorspace().num_components() * self.bit_depth().size_of()
    }

    pub const fn colorspace(self) -> ColorSpace {
        match self {
            Self::Nrgba8 | Self::Nrgba16 | Self::Rgba8 | Self::Rgba16 => ColorSpace::RGBA,
            Self::Gray8 | Self::Gray16 => ColorSpace::Luma
        }
    }

    pub const fn bit_depth(self) -> BitDepth {
        match self {
            Self::Nrgba8 | Self::Rgba8 | Self::Gray8 => BitDepth::Eight,
            Self::Nrgba16 | Self::Rgba16 | Self::Gray16 => BitDepth::Sixteen
        }
    }

    pub const fn is_premultiplied(self) -> bool {
        matches!(self, Self::Rgba8 | Self::Rgba16)
    }

    /// Read one pixel from the start of `pixel`
    ///
    /// `pixel` must hold at least [`bytes_per_pixel`](Self::bytes_per_pixel) bytes
    pub fn read(self, pixel: &[u8]) -> Color {
        match self {
            Self::Nrgba8 => Color::Nrgba8([pixel[0], pixel[1], pixel[2], pixel[3]]),
            Self::Rgba8 => Color::Rgba8([pixel[0], pixel[1], pixel[2], pixel[3]]),
            Self::Nrgba16 => Color::Nrgba16(read_u16x4(pixel)),
            Self::Rgba16 => Color::Rgba16(read_u16x4(pixel)),
            Self::Gray8 => Color::Gray8(pixel[0]),
            Self::Gray16 => Color::Gray16(u16::from_be_bytes([pixel[0], pixel[1]]))
        }
    }

    /// Convert `color` to this layout and store it at the start of `pixel`
    pub fn write(self, color: Color, pixel: &mut [u8]) {
        match self {
            Self::Nrgba8 => pixel[..4].copy_from_slice(&color.to_nrgba8()),
            Self::Rgba8 => pixel[..4].copy_from_slice(&color.to_rgba8()),
            Self::Nrgba16 => write_u16x4(color.to_nrgba16(), pixel),
            Self::Rgba16 => write_u16x4(color.to_rgba16(), pixel),
            Self::Gray8 => pixel[0] = color.to_gray8(),
            Self::Gray16 => pixel[..2].copy_from_slice(&color.to_gray16().to_be_bytes())
        }
    }
}

fn read_u16x4(pixel: &[u8]) -> [u16; 4] {
    let mut out = [0; 4];
    for (sample, bytes) in out.iter_mut().zip(pixel.chunks_exact(2)) {
        *sample = u16::from_be_bytes([bytes[0], bytes[1]]);
    }
    out
}

fn write_u16x4(samples: [u16; 4], pixel: &mut [u8]) {
    for (sample, bytes) in samples.iter().zip(pixel.chunks_exact_mut(2)) {
        bytes.copy_from_slice(&sample.to_be_bytes());
    }
}

/// An owned, rectangular grid of pixels
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    stride: usize,
    bounds: Rect,
    layout: PixelLayout
}

impl PixelBuffer {
    /// Create a zero filled `width` by `height` buffer with a tight stride
    ///
    /// # Panics
    /// If `width * height * bytes_per_pixel` overflows a `usize`
    pub fn new(width: usize, height: usize, layout: PixelLayout) -> PixelBuffer {
        PixelBuffer::with_bounds(Rect::from_dimensions(width, height), layout)
    }

    /// Create a zero filled buffer covering `bounds`
    ///
    /// # Panics
    /// If the buffer size overflows a `usize`
    pub fn with_bounds(bounds: Rect, layout: PixelLayout) -> PixelBuffer {
        let stride = bounds
            .width()
            .checked_mul(layout.bytes_per_pixel())
            .expect("row size overflows usize");
        let size = stride
            .checked_mul(bounds.height())
            .expect("buffer size overflows usize");

        PixelBuffer {
            pixels: vec![0; size],
            stride,
            bounds,
            layout
        }
    }

    /// Wrap tightly packed pixels, anchored at the origin
    ///
    /// # Errors
    /// If `pixels` is not exactly `width * height * bytes_per_pixel` long
    pub fn from_raw(
        width: usize, height: usize, layout: PixelLayout, pixels: Vec<u8>
    ) -> Result<PixelBuffer, &'static str> {
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(layout.bytes_per_pixel()))
            .ok_or("Dimensions overflow usize")?;

        if expected != pixels.len() {
            return Err("Pixel length does not match dimensions");
        }
        Ok(PixelBuffer {
            pixels,
            stride: width * layout.bytes_per_pixel(),
            bounds: Rect::from_dimensions(width, height),
            layout
        })
    }

    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    pub const fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Return `(width, height)` of the buffer
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.bounds.width(), self.bounds.height())
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Destroy the buffer returning its backing storage
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Store `color` at `(x, y)`, converting it to the buffer's layout.
    ///
    /// Coordinates outside the bounds are ignored
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        if let Some(offset) = pixel_offset(self.bounds, self.stride, self.layout, x, y) {
            let end = offset + self.layout.bytes_per_pixel();
            self.layout.write(color, &mut self.pixels[offset..end]);
        }
    }

    /// Borrow the whole buffer as a view
    pub fn as_view(&self) -> PixelView<'_> {
        PixelView {
            pixels: &self.pixels,
            stride: self.stride,
            bounds: self.bounds,
            layout: self.layout
        }
    }

    /// Borrow the part of the buffer inside `rect`, see [`PixelView::sub_image`]
    pub fn sub_image(&self, rect: Rect) -> PixelView<'_> {
        self.as_view().sub_image(rect)
    }
}

/// A read only rectangle borrowed from a [`PixelBuffer`]
///
/// The first byte of `pixels` is the pixel at `bounds.min`, rows are
/// `stride` bytes apart and the final row may end before a full stride.
#[derive(Copy, Clone, Debug)]
pub struct PixelView<'a> {
    pixels: &'a [u8],
    stride: usize,
    bounds: Rect,
    layout: PixelLayout
}

impl<'a> PixelView<'a> {
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    pub const fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub const fn stride(&self) -> usize {
        self.stride
    }

    pub const fn pixels(&self) -> &'a [u8] {
        self.pixels
    }

    /// Iterate over the rows of the view if it is stored as `layout`
    pub fn rows(&self, layout: PixelLayout) -> Option<NativeRows<'a>> {
        if layout != self.layout {
            return None;
        }
        Some(NativeRows::new(
            self.pixels,
            self.stride,
            self.bounds.width() * layout.bytes_per_pixel(),
            self.bounds.height()
        ))
    }

    /// Borrow the part of this view inside `rect`.
    ///
    /// `rect` is clipped to the view, coordinates keep referring to the
    /// same pixels as in the parent, i.e the sub image of `(1,1)-(3,3)`
    /// has its first pixel at `(1,1)`
    pub fn sub_image(&self, rect: Rect) -> PixelView<'a> {
        let bounds = rect.intersect(self.bounds);

        if bounds.is_empty() {
            return PixelView {
                pixels: &[],
                stride: 0,
                bounds,
                layout: self.layout
            };
        }
        // bounds is non empty and inside self.bounds so the offset exists
        let offset =
            pixel_offset(self.bounds, self.stride, self.layout, bounds.min_x, bounds.min_y)
                .unwrap_or(0);

        PixelView {
            pixels: &self.pixels[offset..],
            stride: self.stride,
            bounds,
            layout: self.layout
        }
    }
}

fn pixel_offset(
    bounds: Rect, stride: usize, layout: PixelLayout, x: usize, y: usize
) -> Option<usize> {
    if !bounds.contains(x, y) {
        return None;
    }
    Some((y - bounds.min_y) * stride + (x - bounds.min_x) * layout.bytes_per_pixel())
}

fn color_at(
    pixels: &[u8], bounds: Rect, stride: usize, layout: PixelLayout, x: usize, y: usize
) -> Color {
    match pixel_offset(bounds, stride, layout, x, y) {
        Some(offset) => layout.read(&pixels[offset..]),
        None => Color::TRANSPARENT
    }
}

impl PixelSource for PixelBuffer {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn color_at(&self, x: usize, y: usize) -> Color {
        color_at(&self.pixels, self.bounds, self.stride, self.layout, x, y)
    }

    fn native_rows(&self, layout: PixelLayout) -> Option<NativeRows<'_>> {
        self.as_view().rows(layout)
    }
}

impl<'a> PixelSource for PixelView<'a> {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn color_at(&self, x: usize, y: usize) -> Color {
        color_at(self.pixels, self.bounds, self.stride, self.layout, x, y)
    }

    fn native_rows(&self, layout: PixelLayout) -> Option<NativeRows<'_>> {
        self.rows(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_4x4() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(4, 4, PixelLayout::Nrgba8);
        for y in 0..4 {
            for x in 0..4 {
                let c = (y * 4 * 4 + x * 4) as u8;
                buffer.set(x, y, Color::Nrgba8([c, c + 1, c + 2, c + 3]));
            }
        }
        buffer
    }

    #[test]
    fn test_rect_canonicalises() {
        let r = Rect::new(3, 3, 1, 1);
        assert_eq!(r, Rect::new(1, 1, 3, 3));
        assert_eq!((r.width(), r.height()), (2, 2));
    }

    #[test]
    fn test_rect_disjoint_intersection_is_zero() {
        let r = Rect::new(0, 0, 2, 2).intersect(Rect::new(5, 5, 6, 6));
        assert_eq!(r, Rect::default());
        assert!(r.is_empty());
    }

    #[test]
    fn test_layout_sizes() {
        assert_eq!(PixelLayout::Nrgba8.bytes_per_pixel(), 4);
        assert_eq!(PixelLayout::Nrgba16.bytes_per_pixel(), 8);
        assert_eq!(PixelLayout::Gray16.bytes_per_pixel(), 2);
        assert!(PixelLayout::Rgba16.is_premultiplied());
        assert!(!PixelLayout::Nrgba16.is_premultiplied());
    }

    #[test]
    fn test_sub_image_shares_parent_pixels() {
        let buffer = pattern_4x4();
        let view = buffer.sub_image(Rect::new(1, 1, 3, 3));

        assert_eq!(view.bounds(), Rect::new(1, 1, 3, 3));
        assert_eq!(view.stride(), 16);
        assert_eq!(view.color_at(1, 1), Color::Nrgba8([0x14, 0x15, 0x16, 0x17]));
        assert_eq!(view.color_at(2, 2), Color::Nrgba8([0x28, 0x29, 0x2a, 0x2b]));
        // outside of the view even though the parent has it
        assert_eq!(view.color_at(0, 0), Color::TRANSPARENT);
        assert_eq!(view.pixels().as_ptr(), buffer.pixels()[20..].as_ptr());
    }

    #[test]
    fn test_native_rows_skip_stride_padding() {
        let buffer = pattern_4x4();
        let view = buffer.sub_image(Rect::new(1, 1, 3, 3));
        let rows: Vec<&[u8]> = view.native_rows(PixelLayout::Nrgba8).unwrap().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b]);
        assert_eq!(rows[1], &[0x24, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2a, 0x2b]);
        assert!(view.native_rows(PixelLayout::Nrgba16).is_none());
    }

    #[test]
    fn test_nested_sub_image() {
        let buffer = pattern_4x4();
        let outer = buffer.sub_image(Rect::new(1, 1, 4, 4));
        let inner = outer.sub_image(Rect::new(2, 2, 10, 10));

        assert_eq!(inner.bounds(), Rect::new(2, 2, 4, 4));
        assert_eq!(inner.color_at(3, 3), Color::Nrgba8([0x3c, 0x3d, 0x3e, 0x3f]));
    }

    #[test]
    fn test_from_raw_checks_length() {
        assert!(PixelBuffer::from_raw(1, 1, PixelLayout::Nrgba16, vec![0; 8]).is_ok());
        assert!(PixelBuffer::from_raw(1, 1, PixelLayout::Nrgba16, vec![0; 4]).is_err());
        assert!(PixelBuffer::from_raw(usize::MAX, 2, PixelLayout::Nrgba8, vec![]).is_err());
    }

    #[test]
    fn test_set_converts_to_layout() {
        let mut buffer = PixelBuffer::new(1, 1, PixelLayout::Nrgba16);
        buffer.set(0, 0, Color::Nrgba8([0x00, 0x55, 0xa0, 0xff]));
        assert_eq!(buffer.pixels(), &[0x00, 0x00, 0x55, 0x55, 0xa0, 0xa0, 0xff, 0xff]);
        // silently ignored
        buffer.set(1, 0, Color::Gray8(0));
    }
}
