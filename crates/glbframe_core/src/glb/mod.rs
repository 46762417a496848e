/// Little-endian stream reads and absolute seeks.
pub mod bytes;
mod chunk;
mod container;
mod document;
mod error;
mod file;
mod header;
mod locate;

/// Chunk descriptors, tags, and enumeration.
pub use chunk::{ChunkDescriptor, ChunkIter, ChunkType, enumerate_chunks};
/// Container entry point and payload spans.
pub use container::{ContainerPayload, PayloadSpan, parse_container, read_span};
/// Scene document hand-off.
pub use document::{DocumentParser, GltfDocument, JsonDocumentParser, load_document};
/// Error and result aliases.
pub use error::{GlbError, Result};
/// In-memory asset abstraction and chunk statistics.
pub use file::{ChunkStats, GlbFile};
/// Header decoding and framing validation.
pub use header::{GlbHeader, is_container_format, validate_json_chunk_framing};
/// Chunk lookup by type or legacy slot index.
pub use locate::{LocateOptions, find_chunk_by_index, find_chunk_by_type};
