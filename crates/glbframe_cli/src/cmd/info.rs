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

/// Print container kind, header fields, and chunk statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, start, json } = args;

	let file = GlbFile::open_at(&path, start)?;
	let stats = file.scan_chunk_stats()?;
	let container = if file.is_binary() { "glb" } else { "json" };

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			container,
			start,
			version: file.header.map(|header| header.version),
			total_length: file.header.map(|header| header.total_length),
			json_offset: file.json.start,
			json_length: file.json.length,
			chunk_count: stats.chunk_count,
			payload_bytes: stats.payload_bytes,
			has_bin: stats.has_bin,
			chunk_types: stats
				.counts
				.iter()
				.map(|(chunk_type, count)| TypeCountJson {
					chunk_type: chunk_type.to_string(),
					count: *count,
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("container: {container}");
	println!("start: {start}");
	if let Some(header) = file.header {
		println!("version: {}", header.version);
		println!("total_length: {}", header.total_length);
	}
	println!("json_offset: {}", file.json.start);
	println!("json_length: {}", file.json.length);
	println!("chunk_count: {}", stats.chunk_count);
	println!("payload_bytes: {}", stats.payload_bytes);
	println!("has_bin: {}", stats.has_bin);

	println!("chunk_types:");
	for (chunk_type, count) in &stats.counts {
		println!("  {chunk_type}: {count}");
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct TypeCountJson {
	chunk_type: String,
	count: u32,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	container: &'static str,
	start: u64,
	version: Option<u32>,
	total_length: Option<u32>,
	json_offset: u64,
	json_length: u64,
	chunk_count: u32,
	payload_bytes: u64,
	has_bin: bool,
	chunk_types: Vec<TypeCountJson>,
}
