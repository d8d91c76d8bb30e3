/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use rawimg_core::bit_depth::BitDepth;
use rawimg_core::color::Color;
use rawimg_core::header::Dimensions;
use rawimg_core::options::DecoderOptions;
use rawimg_core::pixels::PixelLayout;
use rawimg_core::source::PixelSource;
use rawimg_farbfeld::{FarbFeldDecoder, FarbFeldErrors};

fn header(width: u32, height: u32) -> Vec<u8> {
    let mut out = b"farbfeld".to_vec();
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    out
}

#[test]
fn test_decode_empty() {
    let image = rawimg_farbfeld::decode(&header(0, 0)[..]).unwrap();
    assert_eq!(image.dimensions(), (0, 0));
    assert_eq!(image.layout(), PixelLayout::Nrgba16);
}

#[test]
fn test_decode_keeps_big_endian_samples() {
    let mut data = header(1, 1);
    data.extend_from_slice(&[0x12, 0x34, 0x00, 0x01, 0xff, 0x00, 0xab, 0xcd]);

    let image = rawimg_farbfeld::decode(&data[..]).unwrap();

    assert_eq!(image.stride(), 8);
    assert_eq!(
        image.pixels(),
        &[0x12, 0x34, 0x00, 0x01, 0xff, 0x00, 0xab, 0xcd]
    );
    assert_eq!(
        image.color_at(0, 0),
        Color::Nrgba16([0x1234, 0x0001, 0xff00, 0xabcd])
    );
}

#[test]
fn test_truncated_header() {
    let err = rawimg_farbfeld::decode(&b"farbfeld\0\0"[..]).unwrap_err();
    assert!(err.is_unexpected_eof(), "{err:?}");
}

#[test]
fn test_truncated_pixels() {
    let mut data = header(2, 1);
    data.extend_from_slice(&[0; 12]);

    let err = rawimg_farbfeld::decode(&data[..]).unwrap_err();
    assert!(err.is_unexpected_eof(), "{err:?}");
}

#[test]
fn test_huge_header_on_short_stream() {
    let mut data = header(0x7fff_ffff, 0x0010_0000);
    data.extend_from_slice(&[0; 8]);

    let err = rawimg_farbfeld::decode(&data[..]).unwrap_err();
    assert!(err.is_unexpected_eof(), "{err:?}");
}

#[test]
fn test_unrepresentable_size() {
    let result = rawimg_farbfeld::decode(&header(u32::MAX, u32::MAX)[..]);

    assert!(matches!(
        result,
        Err(FarbFeldErrors::TooLargeDimensions("size", ..))
    ));
}

#[test]
fn test_decode_header() {
    let data = header(0x0102, 0x0a0b0c0d);
    let mut decoder = FarbFeldDecoder::new(&data[..]);
    decoder.decode_headers().unwrap();

    assert_eq!(decoder.dimensions(), Some(Dimensions::new(0x0102, 0x0a0b0c0d)));
    assert_eq!(decoder.bit_depth(), BitDepth::Sixteen);
    assert_eq!(
        rawimg_farbfeld::decode_header(&header(9, 3)[..]).unwrap(),
        Dimensions::new(9, 3)
    );
}

#[test]
fn test_strict_mode_rejects_imagefile() {
    let data = b"imagefile\0\0\0\0\0\0\0\0";

    let options = DecoderOptions::default().set_strict_mode(true);
    let result = FarbFeldDecoder::new_with_options(&data[..], options).decode();
    assert!(matches!(result, Err(FarbFeldErrors::WrongMagicBytes)));
}

#[test]
fn test_max_height() {
    let options = DecoderOptions::default().set_max_height(100);
    let result = FarbFeldDecoder::new_with_options(&header(1, 101)[..], options).decode();

    assert!(matches!(
        result,
        Err(FarbFeldErrors::TooLargeDimensions("height", 101, 100))
    ));
}
