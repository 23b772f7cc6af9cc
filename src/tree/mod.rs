mod capability;
mod emit;
mod error;
mod json;
mod scalar;
mod sink;
mod writer;

/// Capability traits and static strategy selection.
pub use capability::{AsObject, AsScalar, AsWrapper, Encode, ObjectTraits, Strategy, WrapperTraits};
/// Root emitter entry points.
pub use emit::{emit, emit_to_vec};
/// Error and result aliases.
pub use error::{Result, TreeError};
/// JSON document adapter and structure counts.
pub use json::{JsonDocument, JsonStats, encode_json, encode_json_into};
/// Scalar capability and the absent-value marker.
pub use scalar::{Empty, ScalarTraits};
/// Byte sinks accepted by the emitter.
pub use sink::{Sink, SliceSink, StreamSink};
/// Per-object field writer and the validation switch.
pub use writer::{TreeWriter, VALIDATES};
