use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Recoverable failures produced while emitting a byte tree stream.
///
/// Structural-contract violations (field order, field counts, scalar sizes,
/// wrapper delegation) are defects in a capability implementation and panic
/// instead of surfacing here.
#[derive(Debug, Error)]
pub enum TreeError {
	/// Transport failure of the writer behind a [`StreamSink`](crate::tree::StreamSink).
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Fixed-capacity sink could not accept the requested bytes.
	#[error("sink full at offset {offset}, need {need} bytes, remaining {remaining}")]
	SinkFull {
		/// Sink offset where the write was attempted.
		offset: u64,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		remaining: usize,
	},
	/// Input document is not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// JSON document root cannot be emitted as an object.
	#[error("document root must be an object or array, got {kind}")]
	RootNotComposite {
		/// JSON kind found at the root.
		kind: &'static str,
	},
}
