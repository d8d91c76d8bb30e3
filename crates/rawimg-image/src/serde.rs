/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "serde-support")]

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::codecs::ImageFormat;
use crate::registry::ImageInfo;

impl Serialize for ImageFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for ImageInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageInfo", 4)?;

        state.serialize_field("format", &self.format)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("dimensions", &self.dimensions)?;
        state.serialize_field("layout", &self.layout)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use rawimg_core::header::Dimensions;
    use rawimg_core::pixels::PixelLayout;

    use crate::codecs::ImageFormat;
    use crate::registry::ImageInfo;

    #[test]
    fn test_serialize_info() {
        let info = ImageInfo {
            format:     ImageFormat::Farbfeld,
            name:       "farbfeld",
            dimensions: Dimensions::new(2, 3),
            layout:     PixelLayout::Nrgba16
        };
        assert_eq!(
            serde_json::to_string(&info).unwrap(),
            r#"{"format":"Farbfeld","name":"farbfeld","dimensions":{"width":2,"height":3},"layout":"Nrgba16"}"#
        );
    }
}
