use std::fs;
use std::io::{self, Cursor, Write};
use std::path::PathBuf;

use glbframe::glb::{ChunkType, GlbError, GlbFile, LocateOptions, Result, find_chunk_by_index};
use log::info;

use crate::cmd::util::parse_chunk_selector;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// `json`, `bin`, or a raw four-character tag. The first matching chunk is written.
	#[arg(long, default_value = "json", conflicts_with = "bin_index")]
	pub chunk: String,
	/// Resolve a binary chunk by legacy slot index instead of by type.
	#[arg(long)]
	pub bin_index: Option<usize>,
	/// Byte offset of the asset inside the file.
	#[arg(long, default_value_t = 0)]
	pub start: u64,
	/// Output file; stdout when absent.
	#[arg(long)]
	pub out: Option<PathBuf>,
}

/// Write one chunk payload.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		chunk,
		bin_index,
		start,
		out,
	} = args;

	let file = GlbFile::open_at(&path, start)?;
	let payload = match bin_index {
		Some(index) => {
			let chunk = find_chunk_by_index(&mut Cursor::new(file.bytes()), start, index, LocateOptions::legacy())?;
			file.chunk_bytes(chunk).ok_or(GlbError::ChunkNotFound { chunk_type: ChunkType::Bin })?
		}
		None => select_by_type(&file, parse_chunk_selector(&chunk)?)?,
	};

	match out {
		Some(out) => {
			fs::write(&out, payload)?;
			info!("wrote {} bytes to {}", payload.len(), out.display());
		}
		None => {
			let mut stdout = io::stdout().lock();
			stdout.write_all(payload)?;
			stdout.flush()?;
		}
	}

	Ok(())
}

fn select_by_type(file: &GlbFile, chunk_type: ChunkType) -> Result<&[u8]> {
	if chunk_type == ChunkType::Json {
		return Ok(file.json_bytes());
	}

	let chunk = file
		.chunks()?
		.into_iter()
		.find(|chunk| chunk.chunk_type == chunk_type)
		.ok_or(GlbError::ChunkNotFound { chunk_type })?;
	file.chunk_bytes(chunk).ok_or(GlbError::ChunkNotFound { chunk_type })
}
