use std::io::Write;

use crate::tree::{Result, TreeError};

/// Append-only byte destination for an emitted stream.
///
/// All integers go out little-endian.
pub trait Sink {
	/// Append `bytes` at the current offset.
	fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;

	/// Number of bytes appended so far.
	fn offset(&self) -> u64;

	/// Append one byte.
	fn write_u8(&mut self, value: u8) -> Result<()> {
		self.write_bytes(&[value])
	}

	/// Append a little-endian `u16`.
	fn write_u16(&mut self, value: u16) -> Result<()> {
		self.write_bytes(&value.to_le_bytes())
	}

	/// Append a little-endian `u32`.
	fn write_u32(&mut self, value: u32) -> Result<()> {
		self.write_bytes(&value.to_le_bytes())
	}
}

impl Sink for Vec<u8> {
	fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
		self.extend_from_slice(bytes);
		Ok(())
	}

	fn offset(&self) -> u64 {
		self.len() as u64
	}
}

/// Fixed-capacity sink over a caller-provided buffer.
#[derive(Debug)]
pub struct SliceSink<'a> {
	buf: &'a mut [u8],
	pos: usize,
}

impl<'a> SliceSink<'a> {
	/// Wrap `buf`; writes fill it from the front.
	pub fn new(buf: &'a mut [u8]) -> Self {
		Self { buf, pos: 0 }
	}

	/// Bytes written so far.
	pub fn written(&self) -> &[u8] {
		&self.buf[..self.pos]
	}

	/// Bytes still available.
	pub fn remaining(&self) -> usize {
		self.buf.len() - self.pos
	}
}

impl Sink for SliceSink<'_> {
	fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
		let remaining = self.remaining();
		if bytes.len() > remaining {
			return Err(TreeError::SinkFull {
				offset: self.pos as u64,
				need: bytes.len(),
				remaining,
			});
		}

		let end = self.pos + bytes.len();
		self.buf[self.pos..end].copy_from_slice(bytes);
		self.pos = end;
		Ok(())
	}

	fn offset(&self) -> u64 {
		self.pos as u64
	}
}

/// Sink adapter that forwards to any [`Write`] and counts what it accepted.
#[derive(Debug)]
pub struct StreamSink<W> {
	inner: W,
	written: u64,
}

impl<W: Write> StreamSink<W> {
	/// Wrap `inner`.
	pub fn new(inner: W) -> Self {
		Self { inner, written: 0 }
	}

	/// Flush the inner writer and return it.
	pub fn into_inner(mut self) -> Result<W> {
		self.inner.flush()?;
		Ok(self.inner)
	}
}

impl<W: Write> Sink for StreamSink<W> {
	fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
		self.inner.write_all(bytes)?;
		self.written += bytes.len() as u64;
		Ok(())
	}

	fn offset(&self) -> u64 {
		self.written
	}
}
