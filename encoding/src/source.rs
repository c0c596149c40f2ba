//! A buffered byte source for DICOM stream decoding.
//!
//! [`ByteSource`] wraps an arbitrary reader
//! and provides the operations the element decoding process relies on:
//! non-consuming look-ahead,
//! endian-aware primitive reads with a run-time switchable byte order,
//! byte skipping,
//! and the current stream position.
//!
//! A short read from the underlying reader
//! is always reported as an unexpected end of stream.

use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use byteordered::Endianness;
use snafu::{Backtrace, IntoError, ResultExt, Snafu};
use std::io::Read;

/// An error during a byte source operation.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The stream ended before the requested data could be fetched.
    #[snafu(display("Unexpected end of stream at position {}", position))]
    UnexpectedEndOfStream { position: u64, backtrace: Backtrace },

    /// The underlying reader failed.
    #[snafu(display("Could not read from source at position {}", position))]
    ReadSource {
        position: u64,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// Memory for a value of the declared length could not be reserved.
    #[snafu(display("Could not allocate memory for value of length {}", length))]
    AllocationSize {
        length: u64,
        source: std::collections::TryReserveError,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// read chunk granularity when filling the look-ahead buffer
const FILL_CHUNK_SIZE: usize = 256;

/// consumed look-ahead prefix is dropped once it grows past this
const COMPACT_THRESHOLD: usize = 1024;

/// A buffered byte source over an arbitrary reader,
/// with look-ahead and a run-time switchable byte order.
///
/// The position starts at zero
/// and advances by the number of consumed bytes;
/// peeking does not move it.
#[derive(Debug)]
pub struct ByteSource<S> {
    inner: S,
    /// bytes fetched from the reader but not yet consumed
    lookahead: Vec<u8>,
    /// the consumed prefix of `lookahead`
    cursor: usize,
    position: u64,
    byte_order: Endianness,
}

impl<S> ByteSource<S>
where
    S: Read,
{
    /// Create a new byte source reading in little endian byte order.
    pub fn new(inner: S) -> Self {
        ByteSource {
            inner,
            lookahead: Vec::new(),
            cursor: 0,
            position: 0,
            byte_order: Endianness::Little,
        }
    }

    /// The number of bytes consumed from the stream so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The byte order currently used by the primitive read operations.
    #[inline]
    pub fn byte_order(&self) -> Endianness {
        self.byte_order
    }

    /// Replace the byte order used by the primitive read operations.
    #[inline]
    pub fn set_byte_order(&mut self, byte_order: Endianness) {
        self.byte_order = byte_order;
    }

    fn buffered(&self) -> usize {
        self.lookahead.len() - self.cursor
    }

    /// Pull bytes from the reader until `n` bytes of look-ahead are
    /// available. Returns `false` if the stream ends first.
    fn fill(&mut self, n: usize) -> Result<bool> {
        if self.cursor > COMPACT_THRESHOLD {
            self.lookahead.drain(..self.cursor);
            self.cursor = 0;
        }
        while self.buffered() < n {
            let mut chunk = [0u8; FILL_CHUNK_SIZE];
            match self.inner.read(&mut chunk) {
                Ok(0) => return Ok(false),
                Ok(k) => self.lookahead.extend_from_slice(&chunk[..k]),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(e).context(ReadSourceSnafu {
                        position: self.position,
                    })
                }
            }
        }
        Ok(true)
    }

    /// Check whether the stream has no more bytes to offer.
    pub fn at_end(&mut self) -> Result<bool> {
        Ok(!self.fill(1)?)
    }

    /// Fetch the next `n` bytes without consuming them.
    ///
    /// Fails with an end of stream error
    /// if fewer than `n` bytes remain.
    pub fn peek(&mut self, n: usize) -> Result<&[u8]> {
        if !self.fill(n)? {
            return UnexpectedEndOfStreamSnafu {
                position: self.position,
            }
            .fail();
        }
        Ok(&self.lookahead[self.cursor..self.cursor + n])
    }

    /// Read exactly `dst.len()` bytes into the given buffer.
    pub fn read_exact(&mut self, dst: &mut [u8]) -> Result<()> {
        let from_lookahead = dst.len().min(self.buffered());
        dst[..from_lookahead]
            .copy_from_slice(&self.lookahead[self.cursor..self.cursor + from_lookahead]);
        self.cursor += from_lookahead;
        if from_lookahead < dst.len() {
            let position = self.position + from_lookahead as u64;
            self.inner
                .read_exact(&mut dst[from_lookahead..])
                .map_err(|e| map_read_error(e, position))?;
        }
        self.position += dst.len() as u64;
        Ok(())
    }

    /// Read exactly `n` bytes into a new byte vector.
    ///
    /// The allocation is guarded,
    /// so that a malformed declared length cannot abort the process.
    pub fn read_vec(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        data.try_reserve_exact(n).context(AllocationSizeSnafu {
            length: n as u64,
        })?;
        data.resize(n, 0);
        self.read_exact(&mut data)?;
        Ok(data)
    }

    /// Consume and discard the next `n` bytes.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        let from_lookahead = n.min(self.buffered());
        self.cursor += from_lookahead;
        let mut remaining = n - from_lookahead;
        let mut chunk = [0u8; FILL_CHUNK_SIZE];
        while remaining > 0 {
            let step = remaining.min(FILL_CHUNK_SIZE);
            match self.inner.read(&mut chunk[..step]) {
                Ok(0) => {
                    return UnexpectedEndOfStreamSnafu {
                        position: self.position + (n - remaining) as u64,
                    }
                    .fail()
                }
                Ok(k) => remaining -= k,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(e).context(ReadSourceSnafu {
                        position: self.position,
                    })
                }
            }
        }
        self.position += n as u64;
        Ok(())
    }

    /// Read an unsigned 16-bit integer in the current byte order.
    pub fn read_u16(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(match self.byte_order {
            Endianness::Little => LittleEndian::read_u16(&buf),
            Endianness::Big => BigEndian::read_u16(&buf),
        })
    }

    /// Read an unsigned 32-bit integer in the current byte order.
    pub fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(match self.byte_order {
            Endianness::Little => LittleEndian::read_u32(&buf),
            Endianness::Big => BigEndian::read_u32(&buf),
        })
    }
}

/// short reads surface as end of stream, anything else as a source failure
fn map_read_error(e: std::io::Error, position: u64) -> Error {
    if e.kind() == std::io::ErrorKind::UnexpectedEof {
        UnexpectedEndOfStreamSnafu { position }.build()
    } else {
        ReadSourceSnafu { position }.into_error(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn peek_does_not_consume() {
        let mut source = ByteSource::new(Cursor::new(vec![1, 2, 3, 4, 5]));
        assert_eq!(source.peek(3).unwrap(), &[1, 2, 3]);
        assert_eq!(source.position(), 0);
        // peeking again yields the same bytes
        assert_eq!(source.peek(2).unwrap(), &[1, 2]);

        let mut buf = [0u8; 3];
        source.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
        assert_eq!(source.position(), 3);
        assert_eq!(source.peek(2).unwrap(), &[4, 5]);
    }

    #[test]
    fn peek_past_end_is_an_error() {
        let mut source = ByteSource::new(Cursor::new(vec![1, 2]));
        assert!(matches!(
            source.peek(4),
            Err(Error::UnexpectedEndOfStream { .. })
        ));
        // the available bytes were not lost
        assert_eq!(source.peek(2).unwrap(), &[1, 2]);
    }

    #[test]
    fn primitive_reads_follow_byte_order() {
        let data = vec![0x08, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x2A];
        let mut source = ByteSource::new(Cursor::new(data));
        assert_eq!(source.byte_order(), Endianness::Little);
        assert_eq!(source.read_u16().unwrap(), 0x0008);
        source.set_byte_order(Endianness::Big);
        assert_eq!(source.read_u16().unwrap(), 0x1000);
        assert_eq!(source.read_u32().unwrap(), 0x0000_002A);
        assert_eq!(source.position(), 8);
    }

    #[test]
    fn skip_discards_bytes() {
        let mut source = ByteSource::new(Cursor::new(vec![1, 2, 3, 4, 5, 6]));
        // make some bytes buffered first
        let _ = source.peek(2).unwrap();
        source.skip(4).unwrap();
        assert_eq!(source.position(), 4);
        assert_eq!(source.peek(2).unwrap(), &[5, 6]);

        assert!(matches!(
            source.skip(4),
            Err(Error::UnexpectedEndOfStream { .. })
        ));
    }

    #[test]
    fn short_read_is_end_of_stream() {
        let mut source = ByteSource::new(Cursor::new(vec![1, 2, 3]));
        let mut buf = [0u8; 8];
        assert!(matches!(
            source.read_exact(&mut buf),
            Err(Error::UnexpectedEndOfStream { .. })
        ));
    }

    #[test]
    fn at_end_detection() {
        let mut source = ByteSource::new(Cursor::new(vec![1]));
        assert!(!source.at_end().unwrap());
        source.skip(1).unwrap();
        assert!(source.at_end().unwrap());
    }

    #[test]
    fn read_vec_reads_exact_amount() {
        let mut source = ByteSource::new(Cursor::new(b"DICMrest".to_vec()));
        let data = source.read_vec(4).unwrap();
        assert_eq!(&data, b"DICM");
        let data = source.read_vec(4).unwrap();
        assert_eq!(&data, b"rest");
    }
}
