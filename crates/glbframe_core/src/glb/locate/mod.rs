use std::io::{Read, Seek};

use log::debug;

use crate::glb::bytes::{read_u32_le, seek_to};
use crate::glb::header::expect_signature;
use crate::glb::{ChunkDescriptor, ChunkIter, ChunkType, GlbError, GlbHeader, Result};

/// Knobs for chunk lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocateOptions {
	/// Allow [`find_chunk_by_index`], which assumes a fixed `JSON, BIN, BIN, ...` slot order.
	pub legacy_positional: bool,
}

impl LocateOptions {
	/// Options with positional lookup enabled.
	pub fn legacy() -> Self {
		Self { legacy_positional: true }
	}
}

/// Return the first chunk of `chunk_type` in stream order, or `None` when absent.
///
/// Framing errors met before a match are returned.
pub fn find_chunk_by_type<R: Read + Seek + ?Sized>(stream: &mut R, start: u64, chunk_type: ChunkType) -> Result<Option<ChunkDescriptor>> {
	for chunk in ChunkIter::new(stream, start)? {
		let chunk = chunk?;
		if chunk.chunk_type == chunk_type {
			return Ok(Some(chunk));
		}
	}
	Ok(None)
}

/// Resolve binary chunk `index` by slot arithmetic: slot 0 holds JSON, binary chunk `i` sits in slot `i + 1`.
///
/// Does not skip extension chunks or tolerate reordering. Prefer [`find_chunk_by_type`].
pub fn find_chunk_by_index<R: Read + Seek + ?Sized>(stream: &mut R, start: u64, index: usize, options: LocateOptions) -> Result<ChunkDescriptor> {
	if !options.legacy_positional {
		return Err(GlbError::PositionalLookupDisabled);
	}

	expect_signature(stream, start)?;
	let header = GlbHeader::decode(stream)?;

	let mut offset = GlbHeader::SIZE;
	let mut length = 0_u32;
	for _ in 0..=index.saturating_add(1) {
		offset += u64::from(length);
		seek_to(stream, start + offset)?;
		length = read_u32_le(stream)?;
		offset += ChunkDescriptor::HEADER_SIZE;
	}

	let start_position = start + offset;
	if offset + u64::from(length) > u64::from(header.total_length) {
		return Err(GlbError::ChunkExceedsFileLength {
			at: start_position,
			length,
			total_length: header.total_length,
		});
	}

	let chunk_type = ChunkType::from_tag(read_u32_le(stream)?);
	if chunk_type != ChunkType::Bin {
		return Err(GlbError::UnexpectedChunkType { index, found: chunk_type });
	}

	debug!("positional lookup resolved binary chunk {index} at {start_position} length {length}");
	Ok(ChunkDescriptor {
		start_position,
		length,
		chunk_type,
	})
}

#[cfg(test)]
mod tests;
