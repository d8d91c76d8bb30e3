/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use rawimg_image::registry::ImageInfo;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// What `--probe` prints for an input
pub struct Metadata<'a> {
    source: &'a str,
    info:   &'a ImageInfo
}

impl<'a> Metadata<'a> {
    pub fn new(source: &'a str, info: &'a ImageInfo) -> Metadata<'a> {
        Metadata { source, info }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 3)?;

        state.serialize_field("source", self.source)?;
        state.serialize_field("info", self.info)?;
        state.serialize_field("pixel_bytes", &self.info.pixel_bytes())?;

        state.end()
    }
}
