/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The input abstraction accepted by the encoders
use crate::color::Color;
use crate::pixels::{PixelLayout, Rect};

/// Anything that can be encoded.
///
/// The only requirement is the ability to report a bounding
/// rectangle and a color for every coordinate inside it,
/// encoders convert colors one by one.
///
/// Storage that already holds pixels in an encoder's native layout
/// can additionally implement [`native_rows`](Self::native_rows),
/// encoders then copy bytes instead of converting pixels.
pub trait PixelSource {
    /// The area covered by the source, encoders write `width()` by `height()` pixels
    fn bounds(&self) -> Rect;

    /// The color at `(x, y)`, in the coordinate space of [`bounds`](Self::bounds)
    fn color_at(&self, x: usize, y: usize) -> Color;

    /// Rows of raw pixel bytes when the source is stored as `layout`
    ///
    /// Returning `Some` is a promise that the bytes are exactly what
    /// converting every pixel with `color_at` would produce, one row per
    /// bounds row starting at `bounds.min`.
    fn native_rows(&self, layout: PixelLayout) -> Option<NativeRows<'_>> {
        let _ = layout;
        None
    }
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn color_at(&self, x: usize, y: usize) -> Color {
        (**self).color_at(x, y)
    }

    fn native_rows(&self, layout: PixelLayout) -> Option<NativeRows<'_>> {
        (**self).native_rows(layout)
    }
}

/// Iterator over tightly trimmed rows of a strided pixel slice
///
/// Each item is `row_bytes` long, padding between rows is skipped
#[derive(Clone, Debug)]
pub struct NativeRows<'a> {
    pixels:    &'a [u8],
    stride:    usize,
    row_bytes: usize,
    rows:      usize
}

impl<'a> NativeRows<'a> {
    /// Create a row iterator
    ///
    /// # Arguments
    /// - pixels: slice starting at the first byte of the first row
    /// - stride: distance in bytes between the start of two rows
    /// - row_bytes: bytes to yield for every row, `<= stride`
    /// - rows: number of rows
    pub const fn new(pixels: &'a [u8], stride: usize, row_bytes: usize, rows: usize) -> Self {
        NativeRows {
            pixels,
            stride,
            row_bytes,
            rows
        }
    }
}

impl<'a> Iterator for NativeRows<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rows == 0 {
            return None;
        }
        let row = self.pixels.get(..self.row_bytes)?;

        self.rows -= 1;
        // the final row may be shorter than a full stride
        self.pixels = self.pixels.get(self.stride..).unwrap_or(&[]);

        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.rows))
    }
}
