/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use crate::bytestream::ZByteReaderTrait;

/// Errors raised by the bytestream reader and writer
pub enum ZByteIoError {
    /// An error reported by the underlying reader or writer
    StdIoError(std::io::Error),
    /// The stream ended before a fixed size read completed
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes requested
    /// - 2nd argument is the number of bytes that were available
    NotEnoughBytes(usize, usize)
}

impl ZByteIoError {
    /// Returns true if this error means the stream ended early
    pub const fn is_unexpected_eof(&self) -> bool {
        matches!(self, ZByteIoError::NotEnoughBytes(..))
    }
}

impl Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::StdIoError(err) => {
                write!(f, "Underlying I/O error {err}")
            }
            ZByteIoError::NotEnoughBytes(expected, found) => {
                write!(
                    f,
                    "Unexpected end of stream, expected {expected} bytes but found {found}"
                )
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ZByteIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZByteIoError::StdIoError(err) => Some(err),
            ZByteIoError::NotEnoughBytes(..) => None
        }
    }
}

impl From<std::io::Error> for ZByteIoError {
    fn from(value: std::io::Error) -> Self {
        ZByteIoError::StdIoError(value)
    }
}

/// Smallest step [`ZReader::read_exact_vec`] grows its output by
const READ_CHUNK_SIZE: usize = 1 << 16;

/// A byte reader over any
/// [`ZByteReaderTrait`] source
pub struct ZReader<T: ZByteReaderTrait> {
    inner:      T,
    bytes_read: u64
}

impl<T: ZByteReaderTrait> ZReader<T> {
    pub fn new(source: T) -> ZReader<T> {
        ZReader {
            inner:      source,
            bytes_read: 0
        }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }
    /// Number of bytes successfully consumed from the source so far
    #[inline(always)]
    pub const fn position(&self) -> u64 {
        self.bytes_read
    }

    /// Fill `buf` completely or fail with [`ZByteIoError::NotEnoughBytes`]
    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        self.inner.read_exact_bytes(buf)?;
        self.bytes_read += buf.len() as u64;
        Ok(())
    }

    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let read = self.inner.read_bytes(buf)?;
        self.bytes_read += read as u64;
        Ok(read)
    }

    /// Read exactly `size` bytes into a new vector
    ///
    /// The vector grows with the bytes actually read, so a short stream
    /// fails with [`ZByteIoError::NotEnoughBytes`] without ever allocating
    /// `size` bytes.
    pub fn read_exact_vec(&mut self, size: usize) -> Result<Vec<u8>, ZByteIoError> {
        let mut out = Vec::new();

        while out.len() < size {
            let filled = out.len();
            let chunk = (size - filled).min(READ_CHUNK_SIZE.max(filled));

            out.resize(filled + chunk, 0);

            let read = self.read_bytes(&mut out[filled..])?;

            if read == 0 {
                return Err(ZByteIoError::NotEnoughBytes(size, filled));
            }
            out.truncate(filled + read);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out at most one byte per call, like a slow pipe
    struct Trickle<'a>(&'a [u8]);

    impl std::io::Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.0.is_empty() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.0[0];
            self.0 = &self.0[1..];
            Ok(1)
        }
    }

    #[test]
    fn test_short_read_reports_counts() {
        let mut reader = ZReader::new(&b"abc"[..]);
        let mut buf = [0; 5];
        let err = reader.read_exact_bytes(&mut buf).unwrap_err();
        assert!(err.is_unexpected_eof());
        assert!(matches!(err, ZByteIoError::NotEnoughBytes(5, 3)));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_read_exact_vec() {
        let data: Vec<u8> = (0..=255).cycle().take(200_000).collect();
        let mut reader = ZReader::new(Trickle(&data[..10]));
        assert_eq!(reader.read_exact_vec(10).unwrap(), &data[..10]);

        let mut reader = ZReader::new(&data[..]);
        assert_eq!(reader.read_exact_vec(200_000).unwrap(), data);
        assert_eq!(reader.position(), 200_000);
    }

    #[test]
    fn test_read_exact_vec_short_stream() {
        // the declared size is never allocated up front
        let mut reader = ZReader::new(&b"abc"[..]);
        let err = reader.read_exact_vec(usize::MAX / 2).unwrap_err();
        assert!(matches!(err, ZByteIoError::NotEnoughBytes(_, 3)));
    }

    #[test]
    fn test_exact_read_over_partial_reads() {
        let mut reader = ZReader::new(Trickle(b"farbfeld"));
        let mut buf = [0; 8];
        reader.read_exact_bytes(&mut buf).unwrap();
        assert_eq!(&buf, b"farbfeld");
    }

    #[test]
    fn test_empty_read_is_fine() {
        let mut reader = ZReader::new(&[0_u8; 0][..]);
        reader.read_exact_bytes(&mut []).unwrap();
    }
}
