/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

/// Encapsulates a simple byte writer with
/// a running count of written bytes
pub struct ZWriter<T: ZByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ZByteWriterTrait> ZWriter<T> {
    /// Create a new writer for the sink
    pub fn new(data: T) -> ZWriter<T> {
        ZWriter {
            buffer:        data,
            bytes_written: 0
        }
    }
    /// Destroy this writer returning the underlying sink
    pub fn inner(self) -> T {
        self.buffer
    }
    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use rawimg_core::bytestream::ZWriter;
    /// let mut sink: Vec<u8> = vec![];
    /// let mut stream = ZWriter::new(&mut sink);
    /// stream.write_all(b"farbfeld").unwrap();
    /// assert_eq!(stream.bytes_written(), 8);
    /// ```
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Write all of `buf` or return the sink's error
    #[inline]
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.buffer.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }

    #[inline]
    pub fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
        self.buffer.write_const_bytes(buf)?;
        self.bytes_written += N;
        Ok(())
    }

    /// Write `value` as a big endian integer
    #[inline]
    pub fn write_u32_be_err(&mut self, value: u32) -> Result<(), ZByteIoError> {
        self.write_const_bytes(&value.to_be_bytes())
    }

    pub fn flush(&mut self) -> Result<(), ZByteIoError> {
        self.buffer.flush_bytes()
    }
}
