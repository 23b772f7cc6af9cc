/// JSON to ByteTree encode command.
pub mod encode;
/// Structural statistics command.
pub mod stats;
/// Shared input and output helpers.
pub(crate) mod util;
