use std::io::Cursor;

use glbframe_testkit::{BIN_TAG, GlbBuilder, JSON_TAG, minimal_doc};

use crate::glb::{ChunkIter, ChunkType, GlbError, enumerate_chunks};

const EXT_TAG: u32 = u32::from_le_bytes(*b"EXTX");

#[test]
fn classifies_known_and_extension_tags() {
	assert_eq!(ChunkType::from_tag(JSON_TAG), ChunkType::Json);
	assert_eq!(ChunkType::from_tag(BIN_TAG), ChunkType::Bin);
	assert_eq!(ChunkType::from_tag(EXT_TAG), ChunkType::Other(EXT_TAG));
	assert_eq!(ChunkType::Other(EXT_TAG).tag(), EXT_TAG);
}

#[test]
fn renders_tag_labels() {
	assert_eq!(ChunkType::Json.to_string(), "JSON");
	assert_eq!(ChunkType::Bin.to_string(), "BIN");
	assert_eq!(ChunkType::Other(EXT_TAG).to_string(), "EXTX");
	assert_eq!(ChunkType::Other(0x0000_0001).to_string(), "0x00000001");
}

#[test]
fn enumerates_all_chunks_in_stream_order() {
	let builder = GlbBuilder::with_json(&minimal_doc())
		.chunk(BIN_TAG, vec![1, 2, 3, 4, 5, 6, 7, 8])
		.chunk(EXT_TAG, vec![0xEE; 12]);
	let bytes = builder.build();
	let total = bytes.len() as u64;
	let mut stream = Cursor::new(bytes);

	let chunks = enumerate_chunks(&mut stream, 0).expect("enumeration succeeds");
	assert_eq!(chunks.len(), 3);
	assert_eq!(chunks[0].chunk_type, ChunkType::Json);
	assert_eq!(chunks[0].start_position, 20);
	assert_eq!(chunks[1].chunk_type, ChunkType::Bin);
	assert_eq!(chunks[1].length, 8);
	assert_eq!(chunks[2].chunk_type, ChunkType::Other(EXT_TAG));

	for pair in chunks.windows(2) {
		assert!(pair[0].end_position() <= pair[1].header_position());
	}
	assert!(chunks[2].end_position() <= total);

	let tiled: u64 = chunks.iter().map(|chunk| 8 + u64::from(chunk.length)).sum();
	assert_eq!(tiled, total - 12);
}

#[test]
fn zero_length_chunks_are_reported() {
	let bytes = GlbBuilder::with_json(&minimal_doc()).chunk(BIN_TAG, Vec::<u8>::new()).build();
	let end = bytes.len() as u64;
	let chunks = enumerate_chunks(&mut Cursor::new(bytes), 0).expect("enumeration succeeds");
	assert_eq!(chunks.len(), 2);
	assert_eq!(chunks[1].length, 0);
	assert_eq!(chunks[1].start_position, end);
}

#[test]
fn container_without_chunks_enumerates_empty() {
	let chunks = enumerate_chunks(&mut Cursor::new(GlbBuilder::new().build()), 0).expect("enumeration succeeds");
	assert!(chunks.is_empty());
}

#[test]
fn overrunning_chunk_is_a_framing_error() {
	let bytes = GlbBuilder::with_json(&minimal_doc()).chunk_with_length(BIN_TAG, 100, vec![0; 8]).build();
	let end = bytes.len() as u64;
	let err = enumerate_chunks(&mut Cursor::new(bytes), 0).expect_err("bin chunk overruns");
	assert!(matches!(err, GlbError::ChunkOverrun { length: 100, stream_end, .. } if stream_end == end));
}

#[test]
fn partial_chunk_header_is_truncated_input() {
	let bytes = GlbBuilder::with_json(&minimal_doc()).trailing(&[0x10, 0, 0]).build();
	let err = enumerate_chunks(&mut Cursor::new(bytes), 0).expect_err("dangling bytes");
	assert!(matches!(err, GlbError::TruncatedInput { need: 4, rem: 3, .. }));
}

#[test]
fn enumeration_requires_signature() {
	let err = enumerate_chunks(&mut Cursor::new(b"{\"asset\":{\"version\":\"2.0\"}}".to_vec()), 0).expect_err("not a container");
	assert!(matches!(err, GlbError::BadSignature { .. }));
}

#[test]
fn iterator_is_lazy_and_fused_after_error() {
	let bytes = GlbBuilder::with_json(&minimal_doc())
		.chunk_with_length(BIN_TAG, 4096, vec![0; 4])
		.chunk(BIN_TAG, vec![0; 4])
		.build();
	let mut stream = Cursor::new(bytes);
	let mut iter = ChunkIter::new(&mut stream, 0).expect("header ok");

	let first = iter.next().expect("first item").expect("json chunk ok");
	assert_eq!(first.chunk_type, ChunkType::Json);
	assert!(matches!(iter.next(), Some(Err(GlbError::ChunkOverrun { .. }))));
	assert!(iter.next().is_none());
	assert!(iter.next().is_none());
}

#[test]
fn enumerates_embedded_container_with_absolute_offsets() {
	let builder = GlbBuilder::with_json(&minimal_doc()).prefix(&[0xAB; 9]).chunk(BIN_TAG, vec![7; 4]);
	let start = builder.start();
	let chunks = enumerate_chunks(&mut Cursor::new(builder.build()), start).expect("enumeration succeeds");
	assert_eq!(chunks[0].start_position, start + 20);
	assert_eq!(chunks[1].chunk_type, ChunkType::Bin);
}
