use log::debug;

use crate::tree::{AsObject, Encode, Result, Sink, TreeWriter};

/// Write a complete stream for `value`: the raw `version` tag, then `value`
/// as the single root object.
///
/// Sink failures abandon the stream; whatever was already appended is not
/// a valid stream and should be discarded by the caller.
pub fn emit<T>(version: u32, value: &T, sink: &mut dyn Sink) -> Result<()>
where
	T: Encode<Strategy = AsObject> + ?Sized,
{
	let start = sink.offset();
	sink.write_u32(version)?;

	let mut root = TreeWriter::root(&mut *sink);
	root.write(value, 0)?;
	root.close();

	debug!("emitted byte tree: version={version}, bytes={}", sink.offset() - start);
	Ok(())
}

/// Emit `value` into a fresh buffer.
pub fn emit_to_vec<T>(version: u32, value: &T) -> Result<Vec<u8>>
where
	T: Encode<Strategy = AsObject> + ?Sized,
{
	let mut out = Vec::new();
	emit(version, value, &mut out)?;
	Ok(out)
}
