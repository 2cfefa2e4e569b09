use std::iter::FusedIterator;

use crate::iff::chunk::decode_header;
use crate::iff::{Chunk, Result};

/// Forward iterator over chunks packed back-to-back in a byte range.
///
/// Ends normally when the range is consumed exactly. A malformed header
/// yields one `Err` and then ends.
#[derive(Debug, Clone)]
pub struct ChunkIter<'a> {
	region: &'a [u8],
	base: usize,
	pos: usize,
	remaining: usize,
	done: bool,
}

impl<'a> ChunkIter<'a> {
	/// Iterate the `len` bytes of `bytes` starting at `offset`.
	pub fn new(bytes: &'a [u8], offset: usize, len: usize) -> Self {
		let region = bytes.get(offset..).unwrap_or(&[]);
		let region = &region[..len.min(region.len())];
		Self::over(region, offset, len)
	}

	/// Iterate `region`, whose first byte sits at absolute offset `base`.
	pub(crate) fn over(region: &'a [u8], base: usize, len: usize) -> Self {
		Self {
			region,
			base,
			pos: 0,
			remaining: len,
			done: false,
		}
	}

	/// Absolute buffer offset of the next header.
	pub fn cursor(&self) -> usize {
		self.base + self.pos
	}

	/// Bytes left in the range.
	pub fn remaining(&self) -> usize {
		self.remaining
	}
}

impl<'a> Iterator for ChunkIter<'a> {
	type Item = Result<Chunk<'a>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		if self.remaining == 0 {
			self.done = true;
			return None;
		}

		let at = self.cursor();
		let chunk = match decode_header(&self.region[self.pos..], at) {
			Ok(value) => value,
			Err(err) => {
				self.done = true;
				return Some(Err(err));
			}
		};

		let step = chunk.total_len();
		self.pos += step;
		self.remaining -= step;
		Some(Ok(chunk))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		if self.done || self.remaining == 0 {
			return (0, Some(0));
		}
		(1, Some(self.remaining / 8 + 1))
	}
}

impl FusedIterator for ChunkIter<'_> {}

/// Two iterators are at the same point when both cursor and remaining length match.
impl PartialEq for ChunkIter<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.cursor() == other.cursor() && self.remaining == other.remaining
	}
}

impl Eq for ChunkIter<'_> {}
