use std::io::{ErrorKind, Read, Seek, SeekFrom};

use crate::glb::{GlbError, Result};

/// Read a little-endian `u32` at the current position and advance by four bytes.
///
/// The value is composed from individual bytes so the result does not depend on host byte order.
pub fn read_u32_le<R: Read + Seek + ?Sized>(stream: &mut R) -> Result<u32> {
	let at = stream.stream_position()?;
	let mut buf = [0_u8; 4];
	let got = read_up_to(stream, &mut buf)?;
	if got < buf.len() {
		return Err(GlbError::TruncatedInput {
			at,
			need: 4,
			rem: got as u64,
		});
	}

	Ok(u32::from(buf[0]) | (u32::from(buf[1]) << 8) | (u32::from(buf[2]) << 16) | (u32::from(buf[3]) << 24))
}

/// Read exactly `len` bytes starting at absolute offset `at`.
pub fn read_exact_at<R: Read + Seek + ?Sized>(stream: &mut R, at: u64, len: u64) -> Result<Vec<u8>> {
	seek_to(stream, at)?;
	let want = usize::try_from(len).map_err(|_| GlbError::TruncatedInput { at, need: len, rem: 0 })?;

	let mut out = Vec::new();
	let got = Read::take(&mut *stream, len).read_to_end(&mut out)?;
	if got < want {
		return Err(GlbError::TruncatedInput {
			at,
			need: len,
			rem: got as u64,
		});
	}
	Ok(out)
}

/// Move the cursor to an absolute offset.
pub fn seek_to<R: Seek + ?Sized>(stream: &mut R, offset: u64) -> Result<u64> {
	Ok(stream.seek(SeekFrom::Start(offset))?)
}

/// Return the absolute stream length. Leaves the cursor at the end.
pub fn stream_len<R: Seek + ?Sized>(stream: &mut R) -> Result<u64> {
	Ok(stream.seek(SeekFrom::End(0))?)
}

fn read_up_to<R: Read + ?Sized>(stream: &mut R, buf: &mut [u8]) -> Result<usize> {
	let mut filled = 0;
	while filled < buf.len() {
		match stream.read(&mut buf[filled..]) {
			Ok(0) => break,
			Ok(read) => filled += read,
			Err(err) if err.kind() == ErrorKind::Interrupted => {}
			Err(err) => return Err(err.into()),
		}
	}
	Ok(filled)
}

#[cfg(test)]
mod tests;
