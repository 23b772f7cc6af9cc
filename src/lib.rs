//! Writer for the ByteTree binary format: a version-tagged tree of
//! field-count-prefixed objects and length-prefixed scalars.
//!
//! ```text
//! Stream     := Version Object
//! Object     := FieldCount Field*
//! Field      := Length Bytes | Object
//! Version, FieldCount, Length := u32 little-endian
//! ```
//!
//! Fields carry no names or indices; position is the only identifier.

/// Capability traits, tree writer, sinks, and the root emitter.
pub mod tree;
