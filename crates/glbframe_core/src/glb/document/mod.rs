use std::io::{Read, Seek};

use crate::glb::{Result, parse_container, read_span};

/// Turns scene document bytes into a document model.
pub trait DocumentParser {
	/// Parsed document type.
	type Document;

	/// Parse one complete document.
	fn parse(&self, bytes: &[u8]) -> Result<Self::Document>;
}

/// Parses scene documents into untyped `serde_json` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocumentParser;

impl DocumentParser for JsonDocumentParser {
	type Document = serde_json::Value;

	fn parse(&self, bytes: &[u8]) -> Result<Self::Document> {
		Ok(serde_json::from_slice(bytes)?)
	}
}

/// Parsed scene document plus its container framing.
#[derive(Debug, Clone, PartialEq)]
pub struct GltfDocument<D> {
	/// Document produced by the parser.
	pub document: D,
	/// `true` when the document came out of a GLB container.
	pub is_binary: bool,
}

/// Locate the scene document of the asset at `start` and hand its bytes to `parser`.
///
/// The parser only ever sees the JSON chunk, never trailing chunks.
pub fn load_document<R, P>(stream: &mut R, start: u64, parser: &P) -> Result<GltfDocument<P::Document>>
where
	R: Read + Seek + ?Sized,
	P: DocumentParser + ?Sized,
{
	let payload = parse_container(stream, start)?;
	let bytes = read_span(stream, payload.json)?;
	let document = parser.parse(&bytes)?;
	Ok(GltfDocument {
		document,
		is_binary: payload.is_binary,
	})
}
