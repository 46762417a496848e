use std::io::{Read, Seek};

use log::debug;

use crate::glb::bytes::{read_u32_le, seek_to, stream_len};
use crate::glb::chunk::read_chunk_header;
use crate::glb::{ChunkDescriptor, ChunkType, GlbError, Result};

/// Parsed GLB header fields following the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlbHeader {
	/// Container format version.
	pub version: u32,
	/// Declared byte length of the whole container, signature included.
	pub total_length: u32,
}

impl GlbHeader {
	/// Little-endian value of the ASCII `glTF` signature.
	pub const MAGIC: u32 = 0x4654_6C67;
	/// Bytes taken by signature, version, and total length.
	pub const SIZE: u64 = 12;
	/// The only container version this parser accepts.
	pub const SUPPORTED_VERSION: u32 = 2;

	/// Decode `(version, total_length)` from the current position. No validation.
	pub fn decode<R: Read + Seek + ?Sized>(stream: &mut R) -> Result<Self> {
		let version = read_u32_le(stream)?;
		let total_length = read_u32_le(stream)?;
		Ok(Self { version, total_length })
	}
}

/// Return `true` when the four bytes at `start` are the GLB signature.
///
/// Leaves the cursor just past the signature. A stream too short to hold a signature is not a container.
pub fn is_container_format<R: Read + Seek + ?Sized>(stream: &mut R, start: u64) -> Result<bool> {
	seek_to(stream, start)?;
	match read_u32_le(stream) {
		Ok(magic) => Ok(magic == GlbHeader::MAGIC),
		Err(GlbError::TruncatedInput { .. }) => Ok(false),
		Err(err) => Err(err),
	}
}

/// Consume the signature at `start`, failing when it does not match.
pub(crate) fn expect_signature<R: Read + Seek + ?Sized>(stream: &mut R, start: u64) -> Result<()> {
	seek_to(stream, start)?;
	let found = read_u32_le(stream)?;
	if found != GlbHeader::MAGIC {
		return Err(GlbError::BadSignature { found });
	}
	Ok(())
}

/// Validate the header and the first chunk sub-header of the container at `start`.
///
/// The signature itself is not rechecked; callers peek it with [`is_container_format`] first.
/// Returns the JSON chunk descriptor without reading its payload.
pub fn validate_json_chunk_framing<R: Read + Seek + ?Sized>(stream: &mut R, start: u64) -> Result<ChunkDescriptor> {
	seek_to(stream, start + 4)?;
	let header = GlbHeader::decode(stream)?;
	if header.version != GlbHeader::SUPPORTED_VERSION {
		return Err(GlbError::UnsupportedVersion { version: header.version });
	}

	let actual = stream_len(stream)?.saturating_sub(start);
	if u64::from(header.total_length) != actual {
		return Err(GlbError::HeaderLengthMismatch {
			declared: header.total_length,
			actual,
		});
	}

	seek_to(stream, start + GlbHeader::SIZE)?;
	let (length, chunk_type) = read_chunk_header(stream)?;
	if chunk_type != ChunkType::Json {
		return Err(GlbError::FirstChunkType { found: chunk_type });
	}

	let payload_start = start + GlbHeader::SIZE + ChunkDescriptor::HEADER_SIZE;
	if payload_start - start + u64::from(length) > u64::from(header.total_length) {
		return Err(GlbError::ChunkExceedsFileLength {
			at: payload_start,
			length,
			total_length: header.total_length,
		});
	}

	debug!("glb framing ok: version={} total_length={} json_length={}", header.version, header.total_length, length);
	Ok(ChunkDescriptor {
		start_position: payload_start,
		length,
		chunk_type,
	})
}
