//! Byte tree view of arbitrary JSON documents.
//!
//! Arrays and objects become objects (object keys are dropped, members go
//! out in key order), `null` becomes [`Empty`], booleans use the bool
//! wrapper, strings are raw UTF-8, and integers that fit in `u32` use the
//! `u32` codec. Other numbers are written as their decimal text.

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::tree::{AsObject, AsWrapper, Empty, Encode, ObjectTraits, Result, Sink, TreeError, TreeWriter, WrapperTraits, emit};

/// Borrowed JSON value that writes as whichever layout its variant needs.
#[derive(Debug, Clone, Copy)]
pub struct JsonDocument<'a>(pub &'a Value);

impl WrapperTraits for JsonDocument<'_> {
	fn write(&self, writer: &mut TreeWriter<'_>, index: u32) -> Result<()> {
		match self.0 {
			Value::Null => writer.write(&Empty, index),
			Value::Bool(flag) => writer.write(flag, index),
			Value::Number(number) => write_number(writer, number, index),
			Value::String(text) => writer.write(text.as_str(), index),
			Value::Array(items) => writer.write(&JsonArray(items), index),
			Value::Object(members) => writer.write(&JsonObject(members), index),
		}
	}
}

impl Encode for JsonDocument<'_> {
	type Strategy = AsWrapper;
}

fn write_number(writer: &mut TreeWriter<'_>, number: &Number, index: u32) -> Result<()> {
	match number.as_u64().and_then(|value| u32::try_from(value).ok()) {
		Some(value) => writer.write(&value, index),
		None => writer.write(number.to_string().as_str(), index),
	}
}

struct JsonArray<'a>(&'a [Value]);

impl ObjectTraits for JsonArray<'_> {
	fn num_fields(&self) -> u32 {
		field_count(self.0.len())
	}

	fn write_fields(&self, writer: &mut TreeWriter<'_>) -> Result<()> {
		for (index, item) in (0_u32..).zip(self.0) {
			writer.write(&JsonDocument(item), index)?;
		}
		Ok(())
	}
}

impl Encode for JsonArray<'_> {
	type Strategy = AsObject;
}

struct JsonObject<'a>(&'a Map<String, Value>);

impl ObjectTraits for JsonObject<'_> {
	fn num_fields(&self) -> u32 {
		field_count(self.0.len())
	}

	fn write_fields(&self, writer: &mut TreeWriter<'_>) -> Result<()> {
		for (index, item) in (0_u32..).zip(self.0.values()) {
			writer.write(&JsonDocument(item), index)?;
		}
		Ok(())
	}
}

impl Encode for JsonObject<'_> {
	type Strategy = AsObject;
}

fn field_count(len: usize) -> u32 {
	u32::try_from(len).unwrap_or(u32::MAX)
}

/// Encode a JSON document whose root is an object or array.
pub fn encode_json(version: u32, document: &Value) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	encode_json_into(version, document, &mut out)?;
	Ok(out)
}

/// Stream a JSON document whose root is an object or array into `sink`.
///
/// A scalar root is rejected before anything reaches the sink.
pub fn encode_json_into(version: u32, document: &Value, sink: &mut dyn Sink) -> Result<()> {
	match document {
		Value::Array(items) => emit(version, &JsonArray(items), sink),
		Value::Object(members) => emit(version, &JsonObject(members), sink),
		other => Err(TreeError::RootNotComposite { kind: kind_name(other) }),
	}
}

fn kind_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// Structural counts of the stream a JSON document encodes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JsonStats {
	/// Objects emitted, including the root.
	pub objects: usize,
	/// Scalar fields emitted.
	pub scalars: usize,
	/// Deepest object nesting; the root object is depth 1.
	pub max_depth: usize,
}

impl JsonStats {
	/// Walk `document` the same way [`encode_json`] lays it out.
	pub fn collect(document: &Value) -> Self {
		let mut stats = Self::default();
		stats.visit(document, 1);
		stats
	}

	fn visit(&mut self, value: &Value, depth: usize) {
		match value {
			Value::Array(items) => self.enter(items.iter(), depth),
			Value::Object(members) => self.enter(members.values(), depth),
			_ => self.scalars += 1,
		}
	}

	fn enter<'a>(&mut self, children: impl Iterator<Item = &'a Value>, depth: usize) {
		self.objects += 1;
		self.max_depth = self.max_depth.max(depth);
		for child in children {
			self.visit(child, depth + 1);
		}
	}
}
