use std::io::{Read, Seek};

use log::debug;

use crate::glb::bytes::{read_exact_at, stream_len};
use crate::glb::{ChunkDescriptor, GlbError, Result, is_container_format, validate_json_chunk_framing};

/// Byte range inside a stream, without the bytes themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadSpan {
	/// Absolute start offset.
	pub start: u64,
	/// Length in bytes.
	pub length: u64,
}

impl PayloadSpan {
	/// Absolute offset one past the range.
	pub fn end(&self) -> u64 {
		self.start + self.length
	}
}

impl From<ChunkDescriptor> for PayloadSpan {
	fn from(chunk: ChunkDescriptor) -> Self {
		Self {
			start: chunk.start_position,
			length: u64::from(chunk.length),
		}
	}
}

/// Where the scene document lives and how it was framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerPayload {
	/// Scene document bytes.
	pub json: PayloadSpan,
	/// `true` when the input was a GLB container, `false` for bare JSON text.
	pub is_binary: bool,
}

/// Locate the scene document of the asset at `start`.
///
/// GLB input is validated and the span covers exactly the JSON chunk. Anything else is treated as bare
/// JSON text running to the stream end, with no framing checks.
pub fn parse_container<R: Read + Seek + ?Sized>(stream: &mut R, start: u64) -> Result<ContainerPayload> {
	if is_container_format(stream, start)? {
		let json = validate_json_chunk_framing(stream, start)?;
		return Ok(ContainerPayload {
			json: json.into(),
			is_binary: true,
		});
	}

	let end = stream_len(stream)?;
	if start > end {
		return Err(GlbError::TruncatedInput {
			at: start,
			need: start - end,
			rem: 0,
		});
	}

	debug!("no glb signature at {start}; treating {} bytes as json text", end - start);
	Ok(ContainerPayload {
		json: PayloadSpan { start, length: end - start },
		is_binary: false,
	})
}

/// Copy the bytes covered by `span` out of the stream.
pub fn read_span<R: Read + Seek + ?Sized>(stream: &mut R, span: PayloadSpan) -> Result<Vec<u8>> {
	read_exact_at(stream, span.start, span.length)
}
