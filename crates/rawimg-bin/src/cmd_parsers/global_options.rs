/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use rawimg_core::options::DecoderOptions;

use crate::cmd_args::OutputFormat;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub format:  OutputFormat,
    pub probe:   bool,
    pub decoder: DecoderOptions
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            format:  OutputFormat::ImageFile,
            probe:   false,
            decoder: DecoderOptions::default()
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(format) = options.get_one::<OutputFormat>("format") {
        cmd_options.format = *format;
    }
    cmd_options.probe = options.get_flag("probe");

    if let Some(width) = options.get_one::<u32>("max-width") {
        cmd_options.decoder = cmd_options.decoder.set_max_width(*width as usize);
    }
    if let Some(height) = options.get_one::<u32>("max-height") {
        cmd_options.decoder = cmd_options.decoder.set_max_height(*height as usize);
    }
    if options.value_source("strict") == Some(ValueSource::CommandLine) {
        info!("Strict mode enabled");
        cmd_options.decoder = cmd_options.decoder.set_strict_mode(true);
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn test_defaults() {
        let matches = create_cmd_args().get_matches_from(["img2if"]);
        let options = parse_options(&matches);

        assert_eq!(options.format, OutputFormat::ImageFile);
        assert!(!options.probe);
        assert_eq!(options.decoder, DecoderOptions::default());
    }

    #[test]
    fn test_limits_and_strict() {
        let matches = create_cmd_args().get_matches_from([
            "img2if",
            "--max-width",
            "64",
            "--max-height",
            "32",
            "--strict",
            "--probe"
        ]);
        let options = parse_options(&matches);

        assert_eq!(options.decoder.max_width(), 64);
        assert_eq!(options.decoder.max_height(), 32);
        assert!(options.decoder.strict_mode());
        assert!(options.probe);
    }
}
