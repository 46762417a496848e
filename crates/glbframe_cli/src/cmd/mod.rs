/// Chunk listing command.
pub mod chunks;
/// Chunk payload extraction command.
pub mod extract;
/// File-level information command.
pub mod info;
/// Shared argument parsing and output helpers.
pub(crate) mod util;
