use std::{io, vec};

use super::shared::ByteOrder;

pub trait ByteWriter {
    /// Writes all of 'data', or fails without reporting how much went through.
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), WriterErr>;

    fn write_u8(&mut self, value: u8) -> Result<(), WriterErr> {
        self.write_bytes(&[value])
    }

    fn write_u64(&mut self, value: u64, order: ByteOrder) -> Result<(), WriterErr> {
        self.write_bytes(&order.u64_to_bytes(value))
    }
}

impl ByteWriter for Vec<u8> {
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), WriterErr> {
        self.extend_from_slice(data);
        Ok(())
    }

    fn write_u8(&mut self, value: u8) -> Result<(), WriterErr> {
        self.push(value);
        Ok(())
    }
}

/// Adapts any `io::Write` into a `ByteWriter`.
/// The wrapped writer is typically buffered, so `finish` must be called to
/// surface errors of the final flush.
pub struct IoByteWriter<W> {
    inner: W,

    /// the number of bytes handed to 'inner' so far.
    num_bytes: u64,
}

impl<W: io::Write> IoByteWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, num_bytes: 0 }
    }

    pub fn num_bytes(&self) -> u64 {
        self.num_bytes
    }

    /// Flushes the wrapped writer and gives it back.
    pub fn finish(mut self) -> Result<W, WriterErr> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: io::Write> ByteWriter for IoByteWriter<W> {
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), WriterErr> {
        self.inner.write_all(data)?;
        self.num_bytes += data.len() as u64;
        Ok(())
    }
}

pub trait ByteReader {
    /// Fills 'buf' completely, or fails if the source runs dry first.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), ReaderErr>;

    fn read_u8(&mut self) -> Result<u8, ReaderErr> {
        let mut out = [0];
        self.read_bytes(&mut out)?;
        Ok(out[0])
    }

    fn read_u64(&mut self, order: ByteOrder) -> Result<u64, ReaderErr> {
        let mut out = [0; 8];
        self.read_bytes(&mut out)?;
        Ok(order.u64_from_bytes(out))
    }
}

impl ByteReader for vec::IntoIter<u8> {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), ReaderErr> {
        if self.len() < buf.len() {
            return Err(ReaderErr::NotEnoughData);
        }
        for byte in buf.iter_mut() {
            *byte = self.next().ok_or(ReaderErr::NotEnoughData)?;
        }
        Ok(())
    }

    fn read_u8(&mut self) -> Result<u8, ReaderErr> {
        self.next().ok_or(ReaderErr::NotEnoughData)
    }
}

impl ByteReader for &[u8] {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), ReaderErr> {
        if self.len() < buf.len() {
            return Err(ReaderErr::NotEnoughData);
        }
        let (head, rest) = self.split_at(buf.len());
        buf.copy_from_slice(head);
        *self = rest;
        Ok(())
    }
}

/// Adapts any `io::Read` into a `ByteReader`.
pub struct IoByteReader<R> {
    inner: R,

    /// the number of bytes consumed from 'inner' so far.
    num_bytes: u64,
}

impl<R: io::Read> IoByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, num_bytes: 0 }
    }

    pub fn num_bytes(&self) -> u64 {
        self.num_bytes
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: io::Read> ByteReader for IoByteReader<R> {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), ReaderErr> {
        self.inner.read_exact(buf)?;
        self.num_bytes += buf.len() as u64;
        Ok(())
    }
}


#[remain::sorted]
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderErr {
    #[error("I/O error while reading: {0}")]
    Io(io::ErrorKind),

    #[error("Not enough data to read")]
    NotEnoughData,
}

impl From<io::Error> for ReaderErr {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => ReaderErr::NotEnoughData,
            kind => ReaderErr::Io(kind),
        }
    }
}

#[remain::sorted]
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterErr {
    #[error("I/O error while writing: {0}")]
    Io(io::ErrorKind),

    #[error("Sink accepted fewer bytes than requested")]
    ShortWrite,
}

impl From<io::Error> for WriterErr {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::WriteZero => WriterErr::ShortWrite,
            kind => WriterErr::Io(kind),
        }
    }
}
