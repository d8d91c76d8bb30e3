/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{stdin, stdout, BufReader, BufWriter, Read, Write};

use log::info;
use rawimg_image::errors::ImageErrors;
use rawimg_image::registry;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::serde::Metadata;

pub fn run_from_cmd(options: &CmdOptions) -> Result<(), ImageErrors> {
    let input = BufReader::new(stdin().lock());

    if options.probe {
        let json = probe(input, options)?;
        println!("{json}");
        return Ok(());
    }
    let mut output = BufWriter::new(stdout().lock());

    convert(input, &mut output, options)?;

    output
        .flush()
        .map_err(|e| ImageErrors::IoErrors(e.into()))
}

/// Decode an image from `input` and write it to `output` in the requested format
pub fn convert<R: Read, W: Write>(
    input: R, output: W, options: &CmdOptions
) -> Result<usize, ImageErrors> {
    let (image, format) = registry::decode(input, options.decoder)?;
    let (width, height) = image.dimensions();

    info!("Decoded {:?} image, {}x{}", format, width, height);

    let written = options.format.image_format().encode(output, &image)?;

    info!("Wrote {} bytes as {:?}", written, options.format);

    Ok(written)
}

/// Read the header of `input` and describe it as pretty printed JSON
pub fn probe<R: Read>(input: R, options: &CmdOptions) -> Result<String, ImageErrors> {
    let info = registry::decode_header(input, options.decoder)?;

    serde_json::to_string_pretty(&Metadata::new("<stdin>", &info))
        .map_err(|e| ImageErrors::EncodeErrors(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_args::OutputFormat;

    fn options(format: OutputFormat) -> CmdOptions {
        registry::register_builtin_formats();

        let mut options = CmdOptions::new();
        options.format = format;
        options
    }

    #[test]
    fn test_farbfeld_to_imagefile() {
        let input = b"farbfeld\0\0\0\x01\0\0\0\x01\x12\x34\x56\x78\x9a\xbc\xff\xff";
        let mut output = vec![];

        let written = convert(&input[..], &mut output, &options(OutputFormat::ImageFile)).unwrap();

        assert_eq!(written, 21);
        assert_eq!(
            output,
            b"imagefile\0\0\0\x01\0\0\0\x01\x12\x56\x9a\xff"
        );
    }

    #[test]
    fn test_imagefile_to_farbfeld() {
        let input = b"imagefile\0\0\0\x01\0\0\0\x01\x00\x55\xa0\xff";
        let mut output = vec![];

        convert(&input[..], &mut output, &options(OutputFormat::Farbfeld)).unwrap();

        assert_eq!(&output[16..], b"\x00\x00\x55\x55\xa0\xa0\xff\xff");
    }

    #[test]
    fn test_png_to_imagefile() {
        // 1x1 RGBA (1, 2, 3, 4)
        let input = b"\x89PNG\r\n\x1a\n\0\0\0\x0dIHDR\0\0\0\x01\0\0\0\x01\x08\x06\0\0\0\x1f\x15\xc4\x89\
                      \0\0\0\x0dIDAT\x78\x9c\x63\x60\x64\x62\x66\x01\0\0\x19\0\x0b\xe7\x5a\x46\xa4\
                      \0\0\0\0IEND\xae\x42\x60\x82";
        let mut output = vec![];

        convert(&input[..], &mut output, &options(OutputFormat::ImageFile)).unwrap();

        assert_eq!(output, b"imagefile\0\0\0\x01\0\0\0\x01\x01\x02\x03\x04");
    }

    #[test]
    fn test_unknown_input() {
        let mut output = vec![];
        let result = convert(&b"GIF89a"[..], &mut output, &options(OutputFormat::ImageFile));

        assert!(matches!(result, Err(ImageErrors::UnknownFormat)));
        assert!(output.is_empty());
    }

    #[test]
    fn test_probe_json() {
        let input = b"imagefile\0\0\0\x02\0\0\0\x03";
        let json = probe(&input[..], &options(OutputFormat::ImageFile)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"], "<stdin>");
        assert_eq!(value["info"]["format"], "ImageFile");
        assert_eq!(value["info"]["dimensions"]["width"], 2);
        assert_eq!(value["info"]["dimensions"]["height"], 3);
        assert_eq!(value["pixel_bytes"], 24);
    }
}
