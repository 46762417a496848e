use std::fmt;
use std::io::{Read, Seek};
use std::iter::FusedIterator;

use log::trace;

use crate::glb::bytes::{read_u32_le, seek_to, stream_len};
use crate::glb::header::expect_signature;
use crate::glb::{GlbError, GlbHeader, Result};

/// Chunk type tag.
///
/// Unrecognized tags are kept as [`ChunkType::Other`] so extension chunks pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChunkType {
	/// Scene description (`JSON`).
	Json,
	/// Binary buffer data (`BIN\0`).
	Bin,
	/// Any other tag.
	Other(u32),
}

impl ChunkType {
	/// Little-endian value of the `JSON` tag.
	pub const JSON_TAG: u32 = 0x4E4F_534A;
	/// Little-endian value of the `BIN\0` tag.
	pub const BIN_TAG: u32 = 0x004E_4942;

	/// Classify a raw tag.
	pub fn from_tag(tag: u32) -> Self {
		match tag {
			Self::JSON_TAG => Self::Json,
			Self::BIN_TAG => Self::Bin,
			other => Self::Other(other),
		}
	}

	/// Raw little-endian tag value.
	pub fn tag(self) -> u32 {
		match self {
			Self::Json => Self::JSON_TAG,
			Self::Bin => Self::BIN_TAG,
			Self::Other(tag) => tag,
		}
	}
}

impl fmt::Display for ChunkType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Json => f.write_str("JSON"),
			Self::Bin => f.write_str("BIN"),
			Self::Other(tag) => {
				let bytes = tag.to_le_bytes();
				let trimmed = bytes.iter().rposition(|byte| *byte != 0).map_or(&bytes[..0], |end| &bytes[..=end]);
				if !trimmed.is_empty() && trimmed.iter().all(|byte| byte.is_ascii_graphic()) {
					trimmed.iter().try_for_each(|byte| write!(f, "{}", char::from(*byte)))
				} else {
					write!(f, "0x{tag:08x}")
				}
			}
		}
	}
}

/// Location of one chunk payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkDescriptor {
	/// Absolute offset of the payload, just past the chunk's own length and type fields.
	pub start_position: u64,
	/// Declared payload length.
	pub length: u32,
	/// Declared chunk type.
	pub chunk_type: ChunkType,
}

impl ChunkDescriptor {
	/// Bytes taken by a chunk's length and type fields.
	pub const HEADER_SIZE: u64 = 8;

	/// Absolute offset one past the payload.
	pub fn end_position(&self) -> u64 {
		self.start_position + u64::from(self.length)
	}

	/// Absolute offset of the chunk's length field.
	pub fn header_position(&self) -> u64 {
		self.start_position - Self::HEADER_SIZE
	}
}

/// Read one chunk's `(length, type)` fields from the current position.
pub(crate) fn read_chunk_header<R: Read + Seek + ?Sized>(stream: &mut R) -> Result<(u32, ChunkType)> {
	let length = read_u32_le(stream)?;
	let tag = read_u32_le(stream)?;
	Ok((length, ChunkType::from_tag(tag)))
}

/// Lazy single-pass iterator over the chunks of a container.
///
/// Stops after the first error. Callers needing a second pass build a new iterator.
pub struct ChunkIter<'a, R: Read + Seek + ?Sized> {
	stream: &'a mut R,
	pos: u64,
	end: u64,
	done: bool,
}

impl<'a, R: Read + Seek + ?Sized> ChunkIter<'a, R> {
	/// Check the signature at `start`, skip the header, and position at the first chunk.
	pub fn new(stream: &'a mut R, start: u64) -> Result<Self> {
		expect_signature(stream, start)?;
		GlbHeader::decode(stream)?;
		let end = stream_len(stream)?;
		Ok(Self {
			stream,
			pos: start + GlbHeader::SIZE,
			end,
			done: false,
		})
	}

	fn read_next(&mut self) -> Result<ChunkDescriptor> {
		seek_to(self.stream, self.pos)?;
		let (length, chunk_type) = read_chunk_header(self.stream)?;
		let start_position = self.pos + ChunkDescriptor::HEADER_SIZE;
		let next = start_position + u64::from(length);
		if next > self.end {
			return Err(GlbError::ChunkOverrun {
				at: start_position,
				length,
				stream_end: self.end,
			});
		}

		trace!("chunk {chunk_type} at {start_position} length {length}");
		self.pos = next;
		Ok(ChunkDescriptor {
			start_position,
			length,
			chunk_type,
		})
	}
}

impl<R: Read + Seek + ?Sized> Iterator for ChunkIter<'_, R> {
	type Item = Result<ChunkDescriptor>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		if self.pos == self.end {
			self.done = true;
			return None;
		}

		let item = self.read_next();
		if item.is_err() {
			self.done = true;
		}
		Some(item)
	}
}

impl<R: Read + Seek + ?Sized> FusedIterator for ChunkIter<'_, R> {}

/// Collect every chunk of the container at `start`.
///
/// The chunks must tile the stream exactly; any framing error aborts with no partial result.
pub fn enumerate_chunks<R: Read + Seek + ?Sized>(stream: &mut R, start: u64) -> Result<Vec<ChunkDescriptor>> {
	ChunkIter::new(stream, start)?.collect()
}

#[cfg(test)]
mod tests;
