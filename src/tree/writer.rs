use log::trace;

use crate::tree::{Encode, ObjectTraits, Result, ScalarTraits, Sink, Strategy, WrapperTraits};

/// Whether structural-contract checks are compiled into this build.
///
/// On in debug builds and whenever the `validate` feature is enabled (the
/// default). With the checks compiled out the stream is only as well-formed
/// as the capability implementations that produce it.
pub const VALIDATES: bool = cfg!(any(debug_assertions, feature = "validate"));

macro_rules! contract {
	($cond:expr, $($msg:tt)+) => {
		if VALIDATES {
			assert!($cond, $($msg)+);
		}
	};
}

/// Emits the direct fields of one object into a shared sink.
///
/// A writer starts without a field count, has it declared exactly once, then
/// accepts fields at indices `0, 1, ..` up to the declared count. Nested
/// objects are written through their own child writer. Breaking any of these
/// rules is a defect in the calling capability implementation and panics.
pub struct TreeWriter<'a> {
	sink: &'a mut dyn Sink,
	num_fields: Option<u32>,
	next_index: u32,
	depth: u32,
}

impl<'a> TreeWriter<'a> {
	fn new(sink: &'a mut dyn Sink, depth: u32) -> Self {
		Self {
			sink,
			num_fields: None,
			next_index: 0,
			depth,
		}
	}

	/// Synthetic single-field writer for a stream root; its count is never emitted.
	pub(crate) fn root(sink: &'a mut dyn Sink) -> Self {
		Self {
			sink,
			num_fields: Some(1),
			next_index: 0,
			depth: 0,
		}
	}

	/// Write `value` as field `index` of the current object.
	///
	/// The layout is chosen statically by `T`'s [`Encode::Strategy`].
	pub fn write<T: Encode + ?Sized>(&mut self, value: &T, index: u32) -> Result<()> {
		<T::Strategy as Strategy<T>>::write_field(self, value, index)
	}

	/// Field count declared for this object, if any.
	pub fn num_fields(&self) -> Option<u32> {
		self.num_fields
	}

	/// Index the next field must be written at.
	pub fn next_index(&self) -> u32 {
		self.next_index
	}

	/// Nesting depth of the object being written; the root object is depth 1.
	pub fn depth(&self) -> u32 {
		self.depth
	}

	/// Current offset of the underlying sink.
	pub fn offset(&self) -> u64 {
		self.sink.offset()
	}

	pub(crate) fn write_object<T: ObjectTraits + ?Sized>(&mut self, value: &T, index: u32) -> Result<()> {
		self.advance(index);

		let mut child = TreeWriter::new(&mut *self.sink, self.depth + 1);
		let num_fields = value.num_fields();
		trace!("object field {index}: depth={}, fields={num_fields}", child.depth);
		child.set_num_fields(num_fields)?;
		value.write_fields(&mut child)?;
		child.close();
		Ok(())
	}

	pub(crate) fn write_scalar<T: ScalarTraits + ?Sized>(&mut self, value: &T, index: u32) -> Result<()> {
		self.advance(index);

		let size = value.size();
		contract!(size <= u64::from(u32::MAX), "scalar size {size} exceeds the u32 length prefix");
		let len = u32::try_from(size).unwrap_or(u32::MAX);
		trace!("scalar field {index}: len={len}");
		self.sink.write_u32(len)?;

		let start = self.sink.offset();
		value.write(&mut *self.sink)?;
		let written = self.sink.offset() - start;
		contract!(written == size, "scalar wrote {written} bytes but declared {size}");
		Ok(())
	}

	pub(crate) fn write_wrapped<T: WrapperTraits + ?Sized>(&mut self, value: &T, index: u32) -> Result<()> {
		contract!(index == self.next_index, "field index out of order: expected {}, got {index}", self.next_index);
		let before = self.next_index;
		value.write(self, index)?;
		let written = self.next_index - before;
		contract!(written == 1, "wrapper wrote {written} fields at index {index}, expected exactly one");
		Ok(())
	}

	fn set_num_fields(&mut self, num_fields: u32) -> Result<()> {
		contract!(self.num_fields.is_none(), "field count declared twice");
		self.sink.write_u32(num_fields)?;
		self.num_fields = Some(num_fields);
		Ok(())
	}

	fn advance(&mut self, index: u32) {
		if VALIDATES {
			let Some(declared) = self.num_fields else {
				panic!("field count must be declared before writing fields");
			};
			assert!(index == self.next_index, "field index out of order: expected {}, got {index}", self.next_index);
			assert!(index < declared, "more fields than declared: index {index}, declared {declared}");
		}
		self.next_index += 1;
	}

	/// Check that every declared field was written.
	pub(crate) fn close(self) {
		contract!(
			self.num_fields == Some(self.next_index),
			"object closed with {} of {:?} declared fields",
			self.next_index,
			self.num_fields
		);
	}
}
