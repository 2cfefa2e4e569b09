use crate::iff::{IffError, Result, Tag};

/// Bounded cursor over one chunk region.
///
/// `base` is the absolute buffer offset of `bytes[0]` so that errors report
/// positions in the caller's buffer rather than in the sub-slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	base: usize,
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at the start of `bytes`.
	pub fn new(bytes: &'a [u8], base: usize) -> Self {
		Self { bytes, base, pos: 0 }
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(IffError::TruncatedHeader {
				at: self.base + self.pos,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a four-byte tag verbatim.
	pub fn read_tag(&mut self) -> Result<Tag> {
		let raw = self.read_exact(4)?;
		let mut out = [0_u8; 4];
		out.copy_from_slice(raw);
		Ok(Tag::new(out))
	}

	/// Read a big-endian `u32`.
	pub fn read_u32_be(&mut self) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(u32::from_be_bytes(buf))
	}
}
