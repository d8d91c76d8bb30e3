/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};
use rawimg_image::codecs::ImageFormat;

/// Format written to stdout
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum OutputFormat {
    ImageFile,
    Farbfeld
}

impl OutputFormat {
    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::ImageFile => ImageFormat::ImageFile,
            Self::Farbfeld => ImageFormat::Farbfeld
        }
    }
}

impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::ImageFile, Self::Farbfeld]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::ImageFile => PossibleValue::new("imagefile").alias("if"),
            Self::Farbfeld => PossibleValue::new("farbfeld").alias("ff")
        })
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("img2if")
        .about("Read an imagefile, farbfeld, PNG or JPEG image from stdin and write it to stdout as imagefile or farbfeld")
        .arg(Arg::new("format")
            .short('f')
            .long("format")
            .help("Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("imagefile"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print the input header as JSON instead of converting"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Largest image width accepted by the decoder")
            .value_parser(value_parser!(u32))
            .default_value("4294967295"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Largest image height accepted by the decoder")
            .value_parser(value_parser!(u32))
            .default_value("4294967295"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Treat a header whose magic does not match the format as an error"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_is_valid() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn test_format_aliases() {
        let matches = create_cmd_args().get_matches_from(["img2if", "--format", "ff"]);
        assert_eq!(
            matches.get_one::<OutputFormat>("format"),
            Some(&OutputFormat::Farbfeld)
        );

        let matches = create_cmd_args().get_matches_from(["img2if"]);
        assert_eq!(
            matches.get_one::<OutputFormat>("format"),
            Some(&OutputFormat::ImageFile)
        );
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(create_cmd_args()
            .try_get_matches_from(["img2if", "--format", "png"])
            .is_err());
    }
}
