/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use rawimg_core::bit_depth::BitDepth;
use rawimg_core::colorspace::ColorSpace;
use rawimg_core::header::Dimensions;
use rawimg_core::options::DecoderOptions;
use rawimg_core::pixels::PixelLayout;
use rawimg_imagefile::{ImageFileDecoder, ImageFileErrors};

fn header(width: u32, height: u32) -> Vec<u8> {
    let mut out = b"imagefile".to_vec();
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    out
}

#[test]
fn test_decode_empty_image() {
    let data = header(0, 0);
    let image = rawimg_imagefile::decode(&data[..]).unwrap();

    assert_eq!(image.dimensions(), (0, 0));
    assert!(image.pixels().is_empty());
    assert_eq!(image.layout(), PixelLayout::Nrgba8);
}

#[test]
fn test_decode_zero_width() {
    // no pixel bytes needed even though the height is non zero
    let data = header(0, 7);
    let image = rawimg_imagefile::decode(&data[..]).unwrap();
    assert_eq!(image.dimensions(), (0, 7));
}

#[test]
fn test_decode_single_pixel() {
    let mut data = header(1, 1);
    data.extend_from_slice(&[0x10, 0x20, 0x30, 0x40]);

    let image = rawimg_imagefile::decode(&data[..]).unwrap();

    assert_eq!(image.dimensions(), (1, 1));
    assert_eq!(image.stride(), 4);
    assert_eq!(image.pixels(), &[0x10, 0x20, 0x30, 0x40]);
}

#[test]
fn test_decode_row_major() {
    let mut data = header(2, 2);
    data.extend(0_u8..16);

    let image = rawimg_imagefile::decode(&data[..]).unwrap();
    assert_eq!(image.stride(), 8);
    assert_eq!(image.pixels(), &(0_u8..16).collect::<Vec<u8>>()[..]);
}

#[test]
fn test_decode_ignores_trailing_bytes() {
    let mut data = header(1, 1);
    data.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7]);

    let image = rawimg_imagefile::decode(&data[..]).unwrap();
    assert_eq!(image.pixels(), &[1, 2, 3, 4]);
}

#[test]
fn test_truncated_header() {
    let data = b"imagefile\x00\x00\x00\x01\x00\x00";
    let err = rawimg_imagefile::decode(&data[..]).unwrap_err();
    assert!(err.is_unexpected_eof(), "{err:?}");

    let err = rawimg_imagefile::decode_header(&data[..]).unwrap_err();
    assert!(err.is_unexpected_eof(), "{err:?}");
}

#[test]
fn test_empty_stream() {
    let err = rawimg_imagefile::decode(&[0_u8; 0][..]).unwrap_err();
    assert!(err.is_unexpected_eof());
}

#[test]
fn test_truncated_pixels() {
    let mut data = header(1, 1);
    data.extend_from_slice(&[0xff, 0xff]);

    let err = rawimg_imagefile::decode(&data[..]).unwrap_err();
    assert!(err.is_unexpected_eof(), "{err:?}");
}

#[test]
fn test_huge_header_on_short_stream() {
    // claims 8 PiB of pixels but carries four bytes
    let mut data = header(0x7fff_ffff, 0x0010_0000);
    data.extend_from_slice(&[1, 2, 3, 4]);

    let err = rawimg_imagefile::decode(&data[..]).unwrap_err();
    assert!(err.is_unexpected_eof(), "{err:?}");
}

#[test]
fn test_unrepresentable_size() {
    let data = header(u32::MAX, u32::MAX);

    match rawimg_imagefile::decode(&data[..]) {
        Err(ImageFileErrors::TooLargeDimensions(name, ..)) => assert_eq!(name, "size"),
        _ => panic!("expected dimensions error")
    }
}

#[test]
fn test_decode_header_only() {
    let data = header(640, 480);
    let dims = rawimg_imagefile::decode_header(&data[..]).unwrap();
    assert_eq!(dims, Dimensions::new(640, 480));
}

#[test]
fn test_decoder_reports_format_info() {
    let data = header(3, 5);
    let mut decoder = ImageFileDecoder::new(&data[..]);

    assert_eq!(decoder.dimensions(), None);
    assert_eq!(decoder.output_buffer_size(), None);

    decoder.decode_headers().unwrap();
    // second call must not read anything
    decoder.decode_headers().unwrap();

    assert_eq!(decoder.dimensions(), Some(Dimensions::new(3, 5)));
    assert_eq!(decoder.output_buffer_size(), Some(3 * 5 * 4));
    assert_eq!(decoder.colorspace(), ColorSpace::RGBA);
    assert_eq!(decoder.bit_depth(), BitDepth::Eight);
}

#[test]
fn test_wrong_magic_is_ignored_by_default() {
    let mut data = header(1, 1);
    data[..9].copy_from_slice(b"notanimag");
    data.extend_from_slice(&[1, 2, 3, 4]);

    let image = rawimg_imagefile::decode(&data[..]).unwrap();
    assert_eq!(image.pixels(), &[1, 2, 3, 4]);
}

#[test]
fn test_wrong_magic_strict() {
    let mut data = header(1, 1);
    data[..9].copy_from_slice(b"notanimag");
    data.extend_from_slice(&[1, 2, 3, 4]);

    let options = DecoderOptions::default().set_strict_mode(true);
    let result = ImageFileDecoder::new_with_options(&data[..], options).decode();

    assert!(matches!(result, Err(ImageFileErrors::WrongMagicBytes)));
}

#[test]
fn test_max_dimensions() {
    let data = header(20, 2);
    let options = DecoderOptions::default().set_max_width(10);
    let result = ImageFileDecoder::new_with_options(&data[..], options).decode();

    match result {
        Err(ImageFileErrors::TooLargeDimensions(name, found, max)) => {
            assert_eq!((name, found, max), ("width", 20, 10));
        }
        _ => panic!("expected dimensions error")
    }
}
