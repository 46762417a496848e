use std::collections::BTreeMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::glb::bytes::seek_to;
use crate::glb::{
	ChunkDescriptor, ChunkType, GlbHeader, JsonDocumentParser, PayloadSpan, Result, enumerate_chunks, find_chunk_by_type, load_document, parse_container,
};

/// In-memory glTF asset, either a GLB container or bare JSON text.
pub struct GlbFile {
	/// Container header, `None` for bare JSON input.
	pub header: Option<GlbHeader>,
	/// Scene document location.
	pub json: PayloadSpan,
	start: u64,
	bytes: Vec<u8>,
}

impl GlbFile {
	/// Read and frame an asset from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::open_at(path, 0)
	}

	/// Read a file from disk and frame the asset embedded at `start`.
	pub fn open_at(path: impl AsRef<Path>, start: u64) -> Result<Self> {
		let bytes = fs::read(path)?;
		Self::from_bytes_at(bytes, start)
	}

	/// Frame an asset already held in memory.
	pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
		Self::from_bytes_at(bytes, 0)
	}

	/// Frame the asset embedded at `start` of an in-memory buffer.
	pub fn from_bytes_at(bytes: Vec<u8>, start: u64) -> Result<Self> {
		let mut stream = Cursor::new(bytes);
		let payload = parse_container(&mut stream, start)?;
		let header = if payload.is_binary {
			seek_to(&mut stream, start + 4)?;
			Some(GlbHeader::decode(&mut stream)?)
		} else {
			None
		};

		Ok(Self {
			header,
			json: payload.json,
			start,
			bytes: stream.into_inner(),
		})
	}

	/// Offset of the asset inside [`GlbFile::bytes`].
	pub fn start(&self) -> u64 {
		self.start
	}

	/// `true` for GLB input.
	pub fn is_binary(&self) -> bool {
		self.header.is_some()
	}

	/// Raw file bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// All chunks in stream order. Empty for bare JSON.
	pub fn chunks(&self) -> Result<Vec<ChunkDescriptor>> {
		if !self.is_binary() {
			return Ok(Vec::new());
		}
		enumerate_chunks(&mut Cursor::new(self.bytes.as_slice()), self.start)
	}

	/// Scene document bytes.
	pub fn json_bytes(&self) -> &[u8] {
		self.span_bytes(self.json).unwrap_or(&[])
	}

	/// Payload of the first `BIN` chunk, if any.
	pub fn bin_bytes(&self) -> Result<Option<&[u8]>> {
		if !self.is_binary() {
			return Ok(None);
		}
		let chunk = find_chunk_by_type(&mut Cursor::new(self.bytes.as_slice()), self.start, ChunkType::Bin)?;
		Ok(chunk.and_then(|chunk| self.span_bytes(chunk.into())))
	}

	/// Payload of an arbitrary chunk.
	pub fn chunk_bytes(&self, chunk: ChunkDescriptor) -> Option<&[u8]> {
		self.span_bytes(chunk.into())
	}

	/// Parse the scene document into a `serde_json` value.
	pub fn document(&self) -> Result<serde_json::Value> {
		let loaded = load_document(&mut Cursor::new(self.bytes.as_slice()), self.start, &JsonDocumentParser)?;
		Ok(loaded.document)
	}

	/// Count chunks by type.
	pub fn scan_chunk_stats(&self) -> Result<ChunkStats> {
		let mut stats = ChunkStats {
			chunk_count: 0,
			payload_bytes: 0,
			has_bin: false,
			counts: BTreeMap::new(),
		};

		for chunk in self.chunks()? {
			stats.chunk_count += 1;
			stats.payload_bytes += u64::from(chunk.length);
			*stats.counts.entry(chunk.chunk_type).or_insert(0) += 1;
			if chunk.chunk_type == ChunkType::Bin {
				stats.has_bin = true;
			}
		}

		Ok(stats)
	}

	fn span_bytes(&self, span: PayloadSpan) -> Option<&[u8]> {
		let start = usize::try_from(span.start).ok()?;
		let end = usize::try_from(span.end()).ok()?;
		self.bytes.get(start..end)
	}
}

/// Chunk counts for one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkStats {
	/// Number of chunks.
	pub chunk_count: u32,
	/// Sum of declared payload lengths.
	pub payload_bytes: u64,
	/// Whether any `BIN` chunk exists.
	pub has_bin: bool,
	/// Chunk count per type.
	pub counts: BTreeMap<ChunkType, u32>,
}
