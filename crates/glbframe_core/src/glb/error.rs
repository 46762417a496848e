use thiserror::Error;

use crate::glb::ChunkType;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, GlbError>;

/// Errors produced while framing, locating, and handing off GLB container data.
#[derive(Debug, Error)]
pub enum GlbError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a fixed-width read.
	#[error("truncated input at offset {at}, need {need} bytes, remaining {rem}")]
	TruncatedInput {
		/// Absolute stream offset where the read was attempted.
		at: u64,
		/// Requested bytes.
		need: u64,
		/// Bytes actually available.
		rem: u64,
	},
	/// Leading magic did not match `glTF`.
	#[error("bad signature 0x{found:08x} (expected 0x46546c67 'glTF')")]
	BadSignature {
		/// Little-endian value read where the signature should be.
		found: u32,
	},
	/// Container version other than 2.
	#[error("unsupported glTF container version {version} (expected 2)")]
	UnsupportedVersion {
		/// Parsed header version.
		version: u32,
	},
	/// Declared total length disagrees with the stream.
	#[error("header declares {declared} bytes but stream holds {actual} from container start")]
	HeaderLengthMismatch {
		/// Length stored in the header.
		declared: u32,
		/// Bytes from the container start to the stream end.
		actual: u64,
	},
	/// First chunk is not the JSON chunk.
	#[error("first chunk must be JSON, got {found}")]
	FirstChunkType {
		/// Tag of the first chunk.
		found: ChunkType,
	},
	/// Positional lookup resolved a chunk that is not BIN.
	#[error("chunk at binary index {index} must be BIN, got {found}")]
	UnexpectedChunkType {
		/// Requested binary chunk index.
		index: usize,
		/// Tag found in that slot.
		found: ChunkType,
	},
	/// Chunk payload runs past the length declared in the header.
	#[error("chunk payload at offset {at} with length {length} exceeds declared file length {total_length}")]
	ChunkExceedsFileLength {
		/// Absolute payload offset.
		at: u64,
		/// Declared payload length.
		length: u32,
		/// Declared container length.
		total_length: u32,
	},
	/// Chunk sequence does not tile the stream exactly.
	#[error("chunk payload at offset {at} with length {length} overruns stream end {stream_end}")]
	ChunkOverrun {
		/// Absolute payload offset.
		at: u64,
		/// Declared payload length.
		length: u32,
		/// Absolute stream end offset.
		stream_end: u64,
	},
	/// Index-based chunk lookup was requested without opting in.
	#[error("positional chunk lookup is disabled (set LocateOptions::legacy_positional)")]
	PositionalLookupDisabled,
	/// Scene document text could not be parsed.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Requested chunk type is absent where the caller requires it.
	#[error("chunk not found: {chunk_type}")]
	ChunkNotFound {
		/// Requested chunk type.
		chunk_type: ChunkType,
	},
	/// CLI chunk selector argument was invalid.
	#[error("invalid chunk selector: {selector}")]
	InvalidChunkSelector {
		/// User-provided selector string.
		selector: String,
	},
}
