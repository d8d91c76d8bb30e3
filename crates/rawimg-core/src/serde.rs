/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "serde")]

use serde::ser::*;

use crate::bit_depth::BitDepth;
use crate::colorspace::ColorSpace;
use crate::header::Dimensions;
use crate::pixels::PixelLayout;

impl Serialize for ColorSpace {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // colorspace serialization is simply it's debug value
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for BitDepth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for PixelLayout {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{:?}", self))
    }
}

impl Serialize for Dimensions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Dimensions", 2)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::header::Dimensions;
    use crate::pixels::PixelLayout;

    #[test]
    fn test_serialize_dimensions() {
        let json = serde_json::to_string(&Dimensions::new(3, 4)).unwrap();
        assert_eq!(json, r#"{"width":3,"height":4}"#);
    }

    #[test]
    fn test_serialize_layout() {
        let json = serde_json::to_string(&PixelLayout::Nrgba16).unwrap();
        assert_eq!(json, r#""Nrgba16""#);
    }
}
