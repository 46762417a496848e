use std::path::PathBuf;

use glbframe::glb::{GlbFile, Result};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Byte offset of the asset inside the file.
	#[arg(long, default_value_t = 0)]
	pub start: u64,
	#[arg(long)]
	pub json: bool,
}

/// List chunks in stream order.
pub fn run(args: Args) -> Result<()> {
	let Args { path, start, json } = args;

	let file = GlbFile::open_at(&path, start)?;
	let chunks = file.chunks()?;

	if json {
		let rows: Vec<ChunkJson> = chunks
			.iter()
			.enumerate()
			.map(|(index, chunk)| ChunkJson {
				index,
				chunk_type: chunk.chunk_type.to_string(),
				tag: format!("0x{:08x}", chunk.chunk_type.tag()),
				header_offset: chunk.header_position(),
				offset: chunk.start_position,
				length: chunk.length,
			})
			.collect();
		return emit_json(&rows);
	}

	if !file.is_binary() {
		println!("{}: bare json text, no chunks", path.display());
		return Ok(());
	}

	for (index, chunk) in chunks.iter().enumerate() {
		println!("{index}: {} offset={} length={}", chunk.chunk_type, chunk.start_position, chunk.length);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct ChunkJson {
	index: usize,
	chunk_type: String,
	tag: String,
	header_offset: u64,
	offset: u64,
	length: u32,
}
