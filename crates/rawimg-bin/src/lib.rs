/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::workflow::run_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod serde;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    rawimg_image::registry::register_builtin_formats();

    if let Err(err) = run_from_cmd(&parsed_opts) {
        error!("Could not convert image, reason {:?}", err);
        eprintln!("{err}");
        exit(1);
    }
}
