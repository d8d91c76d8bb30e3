/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading and writing images
//!
//! Both traits are implemented for every [`Read`] and [`Write`]
//! type, so files, sockets, `&[u8]`, `Vec<u8>` and standard
//! streams can be handed to the codecs directly.
use std::io::{ErrorKind, Read, Write};

use crate::bytestream::reader::ZByteIoError;

/// The input trait implemented for readers.
pub trait ZByteReaderTrait {
    /// Read bytes into `buf` returning how many bytes were read
    ///
    /// A return of `Ok(0)` for a non-empty `buf` means the source is exhausted.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError>;

    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// ## Errors
    /// If the source ends before `buf` is full, [`ZByteIoError::NotEnoughBytes`]
    /// is returned carrying the requested and the actually read byte counts.
    /// The contents of `buf` are then unspecified.
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError>;
}

/// The writer trait implemented for the encoders
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images
pub trait ZByteWriterTrait {
    /// Write all bytes to the sink or return an error if something occurred
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError>;
    /// Write a fixed number of bytes and error out if we can't write the bytes
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
        self.write_all_bytes(buf)
    }
    /// Ensure bytes are written to the sink.
    fn flush_bytes(&mut self) -> Result<(), ZByteIoError>;
}

impl<T: Read> ZByteReaderTrait for T {
    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        loop {
            match self.read(buf) {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ZByteIoError::from(e))
            }
        }
    }

    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        let mut filled = 0;

        while filled < buf.len() {
            let read = self.read_bytes(&mut buf[filled..])?;

            if read == 0 {
                return Err(ZByteIoError::NotEnoughBytes(buf.len(), filled));
            }
            filled += read;
        }
        Ok(())
    }
}

impl<T: Write> ZByteWriterTrait for T {
    #[inline]
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.write_all(buf).map_err(ZByteIoError::from)
    }

    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        self.flush().map_err(ZByteIoError::from)
    }
}
