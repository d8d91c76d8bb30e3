/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Magic pattern based format dispatch
//!
//! A [`FormatRegistry`] holds a list of [`FormatEntry`]s. To decode a stream
//! the registry reads as many bytes as its longest pattern, picks the
//! first entry whose pattern matches and hands the codec a reader that
//! replays the consumed bytes before the rest of the stream.
//!
//! Patterns are matched byte for byte, except `?` which matches anything.
//!
//! Besides owned registries there is one process wide table used by the
//! free functions of this module. It starts empty, formats only become
//! visible after [`register_format`] or [`register_builtin_formats`].
use std::io::{Cursor, Read};
use std::sync::{PoisonError, RwLock};

use rawimg_core::bytestream::ZReader;
use rawimg_core::header::Dimensions;
use rawimg_core::log::{debug, trace};
use rawimg_core::options::DecoderOptions;
use rawimg_core::pixels::{PixelBuffer, PixelLayout};

use crate::codecs::{self, ImageFormat};
use crate::errors::ImageErrors;

/// Decode a whole image from a stream positioned at the start of the header
pub type DecodeFn = fn(&mut dyn Read, DecoderOptions) -> Result<PixelBuffer, ImageErrors>;

/// Decode only the header from a stream positioned at the start of the header,
/// returning the dimensions and the layout `decode` would produce
pub type DecodeHeaderFn =
    fn(&mut dyn Read, DecoderOptions) -> Result<(Dimensions, PixelLayout), ImageErrors>;

/// A registered image format
#[derive(Copy, Clone, Debug)]
pub struct FormatEntry {
    pub format:        ImageFormat,
    /// Human readable name, entries are unique by name
    pub name:          &'static str,
    /// Header pattern, `?` matches any byte
    pub pattern:       &'static [u8],
    pub decode:        DecodeFn,
    pub decode_header: DecodeHeaderFn
}

impl FormatEntry {
    /// Returns true if `prefix` starts with this entry's pattern
    pub fn matches(&self, prefix: &[u8]) -> bool {
        prefix.len() >= self.pattern.len()
            && self
                .pattern
                .iter()
                .zip(prefix)
                .all(|(p, b)| *p == b'?' || p == b)
    }
}

/// Information about an image obtained by reading its header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ImageInfo {
    pub format:     ImageFormat,
    pub name:       &'static str,
    pub dimensions: Dimensions,
    pub layout:     PixelLayout
}

impl ImageInfo {
    /// Number of bytes the decoded pixels occupy
    pub fn pixel_bytes(&self) -> Option<usize> {
        (self.dimensions.width as usize)
            .checked_mul(self.dimensions.height as usize)?
            .checked_mul(self.layout.bytes_per_pixel())
    }
}

/// An ordered list of formats, earlier entries win on ambiguous prefixes
#[derive(Clone, Debug, Default)]
pub struct FormatRegistry {
    entries: Vec<FormatEntry>
}

impl FormatRegistry {
    /// Create an empty registry
    pub const fn new() -> FormatRegistry {
        FormatRegistry {
            entries: Vec::new()
        }
    }

    /// Add `entry`, replacing an entry with the same name if present
    pub fn register(&mut self, entry: FormatEntry) {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => {
                debug!("Registering format {}", entry.name);
                self.entries.push(entry);
            }
        }
    }

    pub fn entries(&self) -> &[FormatEntry] {
        &self.entries
    }

    /// Length of the longest pattern, the number of bytes read before dispatch
    pub fn max_pattern_len(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.pattern.len())
            .max()
            .unwrap_or(0)
    }

    /// Return the first entry matching `prefix`
    pub fn guess_format(&self, prefix: &[u8]) -> Option<&FormatEntry> {
        self.entries.iter().find(|e| e.matches(prefix))
    }

    /// Detect the format of `reader` and decode it
    ///
    /// # Errors
    /// - [`ImageErrors::UnknownFormat`] if no entry matches, including streams
    ///   shorter than every pattern
    /// - Whatever the matching codec reports
    pub fn decode<R: Read>(
        &self, reader: R, options: DecoderOptions
    ) -> Result<(PixelBuffer, ImageFormat), ImageErrors> {
        let (entry, mut stream) = self.sniff(reader)?;
        let image = (entry.decode)(&mut stream, options)?;

        Ok((image, entry.format))
    }

    /// Detect the format of `reader` and read only its header
    pub fn decode_header<R: Read>(
        &self, reader: R, options: DecoderOptions
    ) -> Result<ImageInfo, ImageErrors> {
        let (entry, mut stream) = self.sniff(reader)?;
        let (dimensions, layout) = (entry.decode_header)(&mut stream, options)?;

        Ok(ImageInfo {
            format: entry.format,
            name: entry.name,
            dimensions,
            layout
        })
    }

    fn sniff<R: Read>(
        &self, reader: R
    ) -> Result<(FormatEntry, std::io::Chain<Cursor<Vec<u8>>, R>), ImageErrors> {
        let mut stream = ZReader::new(reader);
        let mut prefix = vec![0; self.max_pattern_len()];
        let mut filled = 0;

        while filled < prefix.len() {
            let read = stream.read_bytes(&mut prefix[filled..])?;
            if read == 0 {
                break;
            }
            filled += read;
        }
        prefix.truncate(filled);

        let entry = *self
            .guess_format(&prefix)
            .ok_or(ImageErrors::UnknownFormat)?;

        trace!("Detected format {}", entry.name);

        Ok((entry, Cursor::new(prefix).chain(stream.consume())))
    }
}

static REGISTRY: RwLock<FormatRegistry> = RwLock::new(FormatRegistry::new());

/// Add `entry` to the process wide registry
///
/// Registering a name twice keeps a single entry
pub fn register_format(entry: FormatEntry) {
    REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(entry);
}

/// Register every codec of this crate, imagefile first
///
/// PNG and JPEG are only registered when their features are enabled.
/// Safe to call any number of times
pub fn register_builtin_formats() {
    codecs::imagefile::register();
    codecs::farbfeld::register();
    #[cfg(feature = "png")]
    codecs::png::register();
    #[cfg(feature = "jpeg")]
    codecs::jpeg::register();
}

/// Return a copy of the process wide registry
pub fn registered_formats() -> FormatRegistry {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Guess the format of `prefix` using the process wide registry
pub fn guess_format(prefix: &[u8]) -> Option<ImageFormat> {
    registered_formats().guess_format(prefix).map(|e| e.format)
}

/// Decode `reader` using the process wide registry
///
/// See [`FormatRegistry::decode`]
pub fn decode<R: Read>(
    reader: R, options: DecoderOptions
) -> Result<(PixelBuffer, ImageFormat), ImageErrors> {
    // the lock is not held while decoding
    registered_formats().decode(reader, options)
}

/// Read the header of `reader` using the process wide registry
pub fn decode_header<R: Read>(reader: R, options: DecoderOptions) -> Result<ImageInfo, ImageErrors> {
    registered_formats().decode_header(reader, options)
}
