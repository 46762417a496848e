use std::io::{self, Write};

use glbframe::glb::{ChunkType, GlbError, Result};

/// Parse `json`, `bin`, or a four-character tag into a chunk type.
pub(crate) fn parse_chunk_selector(selector: &str) -> Result<ChunkType> {
	match selector.to_ascii_lowercase().as_str() {
		"json" => return Ok(ChunkType::Json),
		"bin" => return Ok(ChunkType::Bin),
		_ => {}
	}

	if selector.is_empty() || selector.len() > 4 || !selector.is_ascii() {
		return Err(GlbError::InvalidChunkSelector {
			selector: selector.to_owned(),
		});
	}

	let mut tag = [0_u8; 4];
	tag[..selector.len()].copy_from_slice(selector.as_bytes());
	Ok(ChunkType::from_tag(u32::from_le_bytes(tag)))
}

/// Pretty-print a serializable value to stdout.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
	let mut out = io::stdout().lock();
	serde_json::to_writer_pretty(&mut out, value)?;
	writeln!(out)?;
	Ok(())
}
