use crate::iff::bytes::Cursor;
use crate::iff::{IffError, Result, Tag};

/// Bytes occupied by a chunk header: 4-byte tag plus 4-byte big-endian size.
pub const CHUNK_HEADER_LEN: usize = 8;

/// Zero-copy view of one chunk inside a caller-owned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
	/// Chunk identifier.
	pub id: Tag,
	/// Declared payload length, decoded from big-endian.
	pub size: u32,
	/// Payload bytes, exactly `size` long.
	pub payload: &'a [u8],
	/// Absolute buffer offset of the chunk header.
	pub offset: usize,
}

impl<'a> Chunk<'a> {
	/// Decode the chunk header at `offset`, with `available` bytes in the
	/// enclosing region.
	///
	/// The region is clamped to the end of `bytes`, so an overstated
	/// `available` can never read past the buffer.
	pub fn parse(bytes: &'a [u8], offset: usize, available: usize) -> Result<Self> {
		let region = bytes.get(offset..).unwrap_or(&[]);
		let region = &region[..available.min(region.len())];
		decode_header(region, offset)
	}

	/// Decode the outermost chunk, treating the whole buffer as its region.
	pub fn parse_root(bytes: &'a [u8]) -> Result<Self> {
		decode_header(bytes, 0)
	}

	/// Absolute buffer offset of the first payload byte.
	pub fn payload_offset(&self) -> usize {
		self.offset + CHUNK_HEADER_LEN
	}

	/// Header plus payload length.
	pub fn total_len(&self) -> usize {
		CHUNK_HEADER_LEN + self.payload.len()
	}

	/// Absolute buffer offset one past the last payload byte.
	pub fn end_offset(&self) -> usize {
		self.offset + self.total_len()
	}
}

/// Decode one header from the start of `region`; `at` is the region's
/// absolute offset.
pub(crate) fn decode_header(region: &[u8], at: usize) -> Result<Chunk<'_>> {
	if region.len() < CHUNK_HEADER_LEN {
		return Err(IffError::TruncatedHeader { at, rem: region.len() });
	}

	let mut cursor = Cursor::new(region, at);
	let id = cursor.read_tag()?;
	let size = cursor.read_u32_be()?;

	let rem = cursor.remaining();
	let payload_len = usize::try_from(size).map_err(|_| IffError::InvalidChunkSize { at, size, rem })?;
	if payload_len > rem {
		return Err(IffError::InvalidChunkSize { at, size, rem });
	}

	let payload = cursor.read_exact(payload_len)?;
	Ok(Chunk {
		id,
		size,
		payload,
		offset: at,
	})
}
