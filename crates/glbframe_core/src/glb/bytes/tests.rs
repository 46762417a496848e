use std::io::Cursor;

use crate::glb::bytes::{read_exact_at, read_u32_le, seek_to, stream_len};
use crate::glb::GlbError;

#[test]
fn reads_little_endian_regardless_of_host_order() {
	let mut stream = Cursor::new(vec![0x67, 0x6c, 0x54, 0x46, 0x02, 0x00, 0x00, 0x00]);
	assert_eq!(read_u32_le(&mut stream).expect("first read"), 0x4654_6c67);
	assert_eq!(read_u32_le(&mut stream).expect("second read"), 2);
	assert_eq!(stream.position(), 8);
}

#[test]
fn short_read_reports_truncation_with_offsets() {
	let mut stream = Cursor::new(vec![1, 2, 3, 4, 5, 6]);
	read_u32_le(&mut stream).expect("first read");

	let err = read_u32_le(&mut stream).expect_err("only two bytes remain");
	assert!(matches!(err, GlbError::TruncatedInput { at: 4, need: 4, rem: 2 }));
}

#[test]
fn seek_is_absolute() {
	let mut stream = Cursor::new(vec![0xAA, 0xBB, 0x01, 0x00, 0x00, 0x00]);
	read_u32_le(&mut stream).expect("read advances");
	seek_to(&mut stream, 2).expect("seek");
	assert_eq!(read_u32_le(&mut stream).expect("read after seek"), 1);
}

#[test]
fn stream_len_reports_total_bytes() {
	let mut stream = Cursor::new(vec![0_u8; 37]);
	seek_to(&mut stream, 5).expect("seek");
	assert_eq!(stream_len(&mut stream).expect("len"), 37);
}

#[test]
fn read_exact_at_copies_requested_range() {
	let mut stream = Cursor::new(b"..payload..".to_vec());
	let bytes = read_exact_at(&mut stream, 2, 7).expect("range fits");
	assert_eq!(bytes, b"payload");

	let err = read_exact_at(&mut stream, 9, 4).expect_err("range overruns");
	assert!(matches!(err, GlbError::TruncatedInput { at: 9, need: 4, rem: 2 }));
}
