use crate::tree::{Result, Sink};

/// Capability for types that serialize as one raw, length-prefixed byte blob.
pub trait ScalarTraits {
	/// Number of bytes [`ScalarTraits::write`] will append for this value.
	///
	/// The writer rejects sizes above `u32::MAX` before anything is written.
	fn size(&self) -> u64;

	/// Append exactly [`ScalarTraits::size`] bytes to `sink`.
	///
	/// Sink failures are returned to the caller and abandon the emission.
	fn write(&self, sink: &mut dyn Sink) -> Result<()>;
}

/// Absent-value marker: occupies a field slot with a zero-length scalar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl ScalarTraits for Empty {
	fn size(&self) -> u64 {
		0
	}

	fn write(&self, _sink: &mut dyn Sink) -> Result<()> {
		Ok(())
	}
}

impl ScalarTraits for u8 {
	fn size(&self) -> u64 {
		1
	}

	fn write(&self, sink: &mut dyn Sink) -> Result<()> {
		sink.write_u8(*self)
	}
}

impl ScalarTraits for u16 {
	fn size(&self) -> u64 {
		2
	}

	fn write(&self, sink: &mut dyn Sink) -> Result<()> {
		sink.write_u16(*self)
	}
}

impl ScalarTraits for u32 {
	fn size(&self) -> u64 {
		4
	}

	fn write(&self, sink: &mut dyn Sink) -> Result<()> {
		sink.write_u32(*self)
	}
}

impl ScalarTraits for [u8] {
	fn size(&self) -> u64 {
		self.len() as u64
	}

	fn write(&self, sink: &mut dyn Sink) -> Result<()> {
		sink.write_bytes(self)
	}
}

impl ScalarTraits for Vec<u8> {
	fn size(&self) -> u64 {
		self.as_slice().size()
	}

	fn write(&self, sink: &mut dyn Sink) -> Result<()> {
		self.as_slice().write(sink)
	}
}

impl ScalarTraits for str {
	fn size(&self) -> u64 {
		self.as_bytes().size()
	}

	fn write(&self, sink: &mut dyn Sink) -> Result<()> {
		self.as_bytes().write(sink)
	}
}

impl ScalarTraits for String {
	fn size(&self) -> u64 {
		self.as_str().size()
	}

	fn write(&self, sink: &mut dyn Sink) -> Result<()> {
		self.as_str().write(sink)
	}
}
