//! Shared test helpers for workspace crates.

/// Little-endian `glTF` signature.
pub const MAGIC: u32 = 0x4654_6C67;
/// Little-endian `JSON` chunk tag.
pub const JSON_TAG: u32 = 0x4E4F_534A;
/// Little-endian `BIN\0` chunk tag.
pub const BIN_TAG: u32 = 0x004E_4942;

/// Byte-level builder for GLB fixtures.
///
/// Writes whatever it is told to, including malformed framing, so tests can mutate single fields.
#[derive(Debug, Clone)]
pub struct GlbBuilder {
	prefix: Vec<u8>,
	version: u32,
	total_length: Option<u32>,
	chunks: Vec<RawChunk>,
	trailing: Vec<u8>,
}

#[derive(Debug, Clone)]
struct RawChunk {
	declared_length: Option<u32>,
	tag: u32,
	payload: Vec<u8>,
}

impl Default for GlbBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl GlbBuilder {
	/// Empty version-2 container with no chunks.
	pub fn new() -> Self {
		Self {
			prefix: Vec::new(),
			version: 2,
			total_length: None,
			chunks: Vec::new(),
			trailing: Vec::new(),
		}
	}

	/// Container holding one JSON chunk for `doc`.
	pub fn with_json(doc: &serde_json::Value) -> Self {
		Self::new().chunk(JSON_TAG, json_payload(doc))
	}

	/// Bytes placed before the container, for embedded-offset tests.
	pub fn prefix(mut self, bytes: &[u8]) -> Self {
		self.prefix = bytes.to_vec();
		self
	}

	/// Override the header version.
	pub fn version(mut self, version: u32) -> Self {
		self.version = version;
		self
	}

	/// Override the header total length instead of computing it.
	pub fn total_length(mut self, total_length: u32) -> Self {
		self.total_length = Some(total_length);
		self
	}

	/// Append a well-formed chunk.
	pub fn chunk(mut self, tag: u32, payload: impl Into<Vec<u8>>) -> Self {
		self.chunks.push(RawChunk {
			declared_length: None,
			tag,
			payload: payload.into(),
		});
		self
	}

	/// Append a chunk whose sub-header declares `declared_length` regardless of the payload written.
	pub fn chunk_with_length(mut self, tag: u32, declared_length: u32, payload: impl Into<Vec<u8>>) -> Self {
		self.chunks.push(RawChunk {
			declared_length: Some(declared_length),
			tag,
			payload: payload.into(),
		});
		self
	}

	/// Raw bytes appended after the last chunk, counted in the computed total length.
	pub fn trailing(mut self, bytes: &[u8]) -> Self {
		self.trailing = bytes.to_vec();
		self
	}

	/// Offset of the container inside the built buffer.
	pub fn start(&self) -> u64 {
		self.prefix.len() as u64
	}

	/// Serialize the fixture.
	pub fn build(&self) -> Vec<u8> {
		let mut body = Vec::new();
		for chunk in &self.chunks {
			let length = chunk.declared_length.unwrap_or(chunk.payload.len() as u32);
			body.extend_from_slice(&length.to_le_bytes());
			body.extend_from_slice(&chunk.tag.to_le_bytes());
			body.extend_from_slice(&chunk.payload);
		}
		body.extend_from_slice(&self.trailing);

		let total_length = self.total_length.unwrap_or(12 + body.len() as u32);
		let mut out = self.prefix.clone();
		out.extend_from_slice(&MAGIC.to_le_bytes());
		out.extend_from_slice(&self.version.to_le_bytes());
		out.extend_from_slice(&total_length.to_le_bytes());
		out.extend_from_slice(&body);
		out
	}
}

/// Serialize `doc` as a JSON chunk payload, space-padded to a four-byte boundary.
pub fn json_payload(doc: &serde_json::Value) -> Vec<u8> {
	let mut out = serde_json::to_vec(doc).unwrap_or_default();
	while out.len() % 4 != 0 {
		out.push(b' ');
	}
	out
}

/// Minimal glTF asset document.
pub fn minimal_doc() -> serde_json::Value {
	serde_json::json!({ "asset": { "version": "2.0" } })
}
