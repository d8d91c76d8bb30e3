/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG and JPEG inputs dispatched through an owned registry
#![cfg(all(feature = "png", feature = "jpeg"))]

use rawimg_core::color::Color;
use rawimg_core::header::Dimensions;
use rawimg_core::options::DecoderOptions;
use rawimg_core::pixels::PixelLayout;
use rawimg_core::source::PixelSource;
use rawimg_image::codecs::{self, ImageFormat};
use rawimg_image::errors::ImageErrors;
use rawimg_image::registry::FormatRegistry;

const RGB8_2X2: &[u8] = include_bytes!("data/rgb8_2x2.png");
const RGBA8_1X1: &[u8] = include_bytes!("data/rgba8_1x1.png");
const GRAY16_1X2: &[u8] = include_bytes!("data/gray16_1x2.png");
const SMALL_JPEG: &[u8] = include_bytes!("data/small_16x16.jpg");

fn registry() -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.register(codecs::imagefile::ENTRY);
    registry.register(codecs::farbfeld::ENTRY);
    registry.register(codecs::png::ENTRY);
    registry.register(codecs::jpeg::ENTRY);
    registry
}

#[test]
fn test_png_rgb_gains_alpha() {
    let (image, format) = registry()
        .decode(RGB8_2X2, DecoderOptions::default())
        .unwrap();

    assert_eq!(format, ImageFormat::PNG);
    assert_eq!(image.layout(), PixelLayout::Nrgba8);
    assert_eq!(image.dimensions(), (2, 2));
    assert_eq!(
        image.pixels(),
        &[255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 10, 20, 30, 255]
    );
}

#[test]
fn test_png_rgba_passes_through() {
    let (image, _) = registry()
        .decode(RGBA8_1X1, DecoderOptions::default())
        .unwrap();

    assert_eq!(image.color_at(0, 0), Color::Nrgba8([1, 2, 3, 4]));
}

#[test]
fn test_png_sixteen_bit_gray() {
    let (image, _) = registry()
        .decode(GRAY16_1X2, DecoderOptions::default())
        .unwrap();

    assert_eq!(image.layout(), PixelLayout::Gray16);
    assert_eq!(image.pixels(), &[0x01, 0x02, 0xff, 0xfe]);

    let info = registry()
        .decode_header(GRAY16_1X2, DecoderOptions::default())
        .unwrap();
    assert_eq!(info.name, "png");
    assert_eq!(info.layout, PixelLayout::Gray16);
    assert_eq!(info.pixel_bytes(), Some(4));
}

#[test]
fn test_png_limits_apply() {
    let options = DecoderOptions::default().set_max_width(1);

    assert!(matches!(
        registry().decode(RGB8_2X2, options),
        Err(ImageErrors::ImageDecodeErrors(_))
    ));
}

#[test]
fn test_jpeg_decodes_to_rgba() {
    let (image, format) = registry()
        .decode(SMALL_JPEG, DecoderOptions::default())
        .unwrap();

    assert_eq!(format, ImageFormat::JPEG);
    assert_eq!(image.layout(), PixelLayout::Nrgba8);
    assert_eq!(image.dimensions(), (16, 16));
    assert!(image.pixels().chunks_exact(4).all(|px| px[3] == 0xff));

    let info = registry()
        .decode_header(SMALL_JPEG, DecoderOptions::default())
        .unwrap();
    assert_eq!(info.format, ImageFormat::JPEG);
    assert_eq!(info.dimensions, Dimensions::new(16, 16));
    assert_eq!(info.layout, PixelLayout::Nrgba8);
}

#[test]
fn test_truncated_png_is_an_error() {
    let result = registry().decode(&RGB8_2X2[..20], DecoderOptions::default());

    assert!(matches!(result, Err(ImageErrors::ImageDecodeErrors(_))));
}

#[test]
fn test_converted_to_imagefile() {
    let (image, _) = registry()
        .decode(RGB8_2X2, DecoderOptions::default())
        .unwrap();
    let mut out: Vec<u8> = vec![];

    ImageFormat::ImageFile.encode(&mut out, &image).unwrap();

    assert_eq!(&out[..17], b"imagefile\0\0\0\x02\0\0\0\x02");
    assert_eq!(&out[17..21], &[255, 0, 0, 255]);
}
