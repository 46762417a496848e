use std::io::Cursor;

use glbframe_testkit::{BIN_TAG, GlbBuilder, JSON_TAG, minimal_doc};

use crate::glb::{ChunkType, GlbError, LocateOptions, find_chunk_by_index, find_chunk_by_type};

const EXT_TAG: u32 = u32::from_le_bytes(*b"EXTX");

fn json_bin() -> GlbBuilder {
	GlbBuilder::with_json(&minimal_doc()).chunk(BIN_TAG, vec![9; 16])
}

#[test]
fn by_type_finds_bin_chunk() {
	let bytes = json_bin().build();
	let end = bytes.len() as u64;
	let bin = find_chunk_by_type(&mut Cursor::new(bytes), 0, ChunkType::Bin).expect("lookup ok").expect("bin present");
	assert_eq!(bin.length, 16);
	assert_eq!(bin.end_position(), end);
}

#[test]
fn by_type_absent_is_not_an_error() {
	let bytes = GlbBuilder::with_json(&minimal_doc()).build();
	let found = find_chunk_by_type(&mut Cursor::new(bytes), 0, ChunkType::Bin).expect("lookup ok");
	assert!(found.is_none());
}

#[test]
fn by_type_returns_first_match_in_stream_order() {
	let bytes = json_bin().chunk(BIN_TAG, vec![1; 4]).build();
	let bin = find_chunk_by_type(&mut Cursor::new(bytes), 0, ChunkType::Bin).expect("lookup ok").expect("bin present");
	assert_eq!(bin.length, 16);
}

#[test]
fn by_type_skips_extension_chunks() {
	let bytes = GlbBuilder::with_json(&minimal_doc())
		.chunk(EXT_TAG, vec![0; 8])
		.chunk(BIN_TAG, vec![3; 4])
		.build();
	let mut stream = Cursor::new(bytes);
	let bin = find_chunk_by_type(&mut stream, 0, ChunkType::Bin).expect("lookup ok").expect("bin present");
	assert_eq!(bin.length, 4);

	let ext = find_chunk_by_type(&mut stream, 0, ChunkType::Other(EXT_TAG)).expect("lookup ok").expect("ext present");
	assert_eq!(ext.start_position, 20 + 28 + 8);
}

#[test]
fn positional_lookup_requires_opt_in() {
	let err = find_chunk_by_index(&mut Cursor::new(json_bin().build()), 0, 0, LocateOptions::default()).expect_err("disabled by default");
	assert!(matches!(err, GlbError::PositionalLookupDisabled));
}

#[test]
fn positional_lookup_matches_type_lookup_for_standard_layout() {
	let builder = json_bin().prefix(b"PACK");
	let start = builder.start();
	let mut stream = Cursor::new(builder.build());

	let by_index = find_chunk_by_index(&mut stream, start, 0, LocateOptions::legacy()).expect("slot 1 is bin");
	let by_type = find_chunk_by_type(&mut stream, start, ChunkType::Bin).expect("lookup ok").expect("bin present");
	assert_eq!(by_index, by_type);
}

#[test]
fn positional_lookup_rejects_phantom_oversized_chunk() {
	let bytes = json_bin().chunk_with_length(BIN_TAG, 0x0010_0000, Vec::<u8>::new()).build();
	let err = find_chunk_by_index(&mut Cursor::new(bytes), 0, 1, LocateOptions::legacy()).expect_err("phantom chunk overruns");
	assert!(matches!(err, GlbError::ChunkExceedsFileLength { length: 0x0010_0000, .. }));
}

#[test]
fn positional_lookup_rejects_non_bin_slot() {
	let bytes = GlbBuilder::with_json(&minimal_doc()).chunk(EXT_TAG, vec![0; 8]).chunk(BIN_TAG, vec![0; 4]).build();
	let err = find_chunk_by_index(&mut Cursor::new(bytes), 0, 0, LocateOptions::legacy()).expect_err("extension chunk in bin slot");
	assert!(matches!(err, GlbError::UnexpectedChunkType { index: 0, found: ChunkType::Other(EXT_TAG) }));
}

#[test]
fn positional_lookup_rejects_json_in_bin_slot() {
	let bytes = GlbBuilder::with_json(&minimal_doc()).chunk(JSON_TAG, vec![b' '; 4]).build();
	let err = find_chunk_by_index(&mut Cursor::new(bytes), 0, 0, LocateOptions::legacy()).expect_err("json in bin slot");
	assert!(matches!(err, GlbError::UnexpectedChunkType { found: ChunkType::Json, .. }));
}

#[test]
fn positional_lookup_past_last_chunk_is_truncated() {
	let bytes = GlbBuilder::with_json(&minimal_doc()).build();
	let err = find_chunk_by_index(&mut Cursor::new(bytes), 0, 0, LocateOptions::legacy()).expect_err("no bin slot");
	assert!(matches!(err, GlbError::TruncatedInput { .. }));
}
