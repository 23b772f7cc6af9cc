//! Static selection of how a type is laid out in the stream.
//!
//! A type becomes writable by implementing exactly one capability trait
//! ([`ObjectTraits`], [`ScalarTraits`], or [`WrapperTraits`]) and naming it
//! through [`Encode::Strategy`]. The compiler enforces the choice:
//!
//! A type with no [`Encode`] impl cannot be written:
//!
//! ```compile_fail
//! use bytetree::tree::emit_to_vec;
//!
//! struct Unregistered;
//! let _ = emit_to_vec(1, &Unregistered);
//! ```
//!
//! A strategy whose capability is missing is rejected:
//!
//! ```compile_fail
//! use bytetree::tree::{AsScalar, Encode};
//!
//! struct Point;
//! impl Encode for Point {
//! 	type Strategy = AsScalar;
//! }
//! ```
//!
//! A second strategy for the same type conflicts:
//!
//! ```compile_fail
//! use bytetree::tree::{AsScalar, AsWrapper, Encode, Result, ScalarTraits, Sink, TreeWriter, WrapperTraits};
//!
//! struct Flag(u8);
//! impl ScalarTraits for Flag {
//! 	fn size(&self) -> u64 { 1 }
//! 	fn write(&self, sink: &mut dyn Sink) -> Result<()> { sink.write_u8(self.0) }
//! }
//! impl WrapperTraits for Flag {
//! 	fn write(&self, w: &mut TreeWriter<'_>, index: u32) -> Result<()> { w.write(&self.0, index) }
//! }
//! impl Encode for Flag {
//! 	type Strategy = AsScalar;
//! }
//! impl Encode for Flag {
//! 	type Strategy = AsWrapper;
//! }
//! ```
//!
//! The root of a stream must be an object:
//!
//! ```compile_fail
//! use bytetree::tree::emit_to_vec;
//!
//! let _ = emit_to_vec(1, &7_u32);
//! ```

use crate::tree::{Empty, Result, ScalarTraits, TreeWriter};

/// Capability for types that serialize as a field-count-prefixed list of fields.
pub trait ObjectTraits {
	/// Number of fields [`ObjectTraits::write_fields`] writes for this instance.
	fn num_fields(&self) -> u32;

	/// Write every field through `writer`, at indices `0..num_fields()` in order.
	fn write_fields(&self, writer: &mut TreeWriter<'_>) -> Result<()>;
}

/// Capability for types that reuse the encoding of another writable type.
///
/// Typical for enums and flags with a one-to-one mapping onto an integer.
pub trait WrapperTraits {
	/// Write the converted representation with exactly one
	/// `writer.write(&converted, index)` call.
	fn write(&self, writer: &mut TreeWriter<'_>, index: u32) -> Result<()>;
}

/// Selects the single capability used to write `Self`.
pub trait Encode {
	/// One of [`AsObject`], [`AsScalar`], or [`AsWrapper`].
	type Strategy: Strategy<Self>;
}

/// Writes one field of `T` using a particular capability.
pub trait Strategy<T: ?Sized> {
	/// Write `value` as field `index` of the object owned by `writer`.
	fn write_field(writer: &mut TreeWriter<'_>, value: &T, index: u32) -> Result<()>;
}

/// Strategy marker for [`ObjectTraits`] types.
#[derive(Debug)]
pub enum AsObject {}

/// Strategy marker for [`ScalarTraits`] types.
#[derive(Debug)]
pub enum AsScalar {}

/// Strategy marker for [`WrapperTraits`] types.
#[derive(Debug)]
pub enum AsWrapper {}

impl<T: ObjectTraits + ?Sized> Strategy<T> for AsObject {
	fn write_field(writer: &mut TreeWriter<'_>, value: &T, index: u32) -> Result<()> {
		writer.write_object(value, index)
	}
}

impl<T: ScalarTraits + ?Sized> Strategy<T> for AsScalar {
	fn write_field(writer: &mut TreeWriter<'_>, value: &T, index: u32) -> Result<()> {
		writer.write_scalar(value, index)
	}
}

impl<T: WrapperTraits + ?Sized> Strategy<T> for AsWrapper {
	fn write_field(writer: &mut TreeWriter<'_>, value: &T, index: u32) -> Result<()> {
		writer.write_wrapped(value, index)
	}
}

macro_rules! scalar_encode {
	($($ty:ty),* $(,)?) => {
		$(
			impl Encode for $ty {
				type Strategy = AsScalar;
			}
		)*
	};
}

scalar_encode!(u8, u16, u32, str, String, [u8], Vec<u8>, Empty);

impl WrapperTraits for bool {
	fn write(&self, writer: &mut TreeWriter<'_>, index: u32) -> Result<()> {
		writer.write(&u8::from(*self), index)
	}
}

impl Encode for bool {
	type Strategy = AsWrapper;
}

impl<T: Encode> WrapperTraits for Option<T> {
	fn write(&self, writer: &mut TreeWriter<'_>, index: u32) -> Result<()> {
		match self {
			Some(value) => writer.write(value, index),
			None => writer.write(&Empty, index),
		}
	}
}

impl<T: Encode> Encode for Option<T> {
	type Strategy = AsWrapper;
}
