use std::fs;
use std::path::Path;

use crate::iff::compression::decode_bytes;
use crate::iff::{Chunk, ChunkPath, ChunkStats, Compression, IffError, Result, WalkOptions, find_chunk, scan_chunk_stats};

/// One fully resident IFF buffer.
pub struct IffFile {
	/// Compression detected on load.
	pub compression: Compression,
	bytes: Vec<u8>,
}

impl IffFile {
	/// Read and, when needed, decompress a file into memory.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::from_bytes(raw)
	}

	/// Wrap an in-memory buffer, decompressing zstd input.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		Ok(Self { compression, bytes })
	}

	/// Decoded buffer bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Decode the top-level chunk.
	pub fn root(&self) -> Result<Chunk<'_>> {
		Chunk::parse_root(&self.bytes)
	}

	/// Bytes left over after the top-level chunk.
	pub fn trailing_len(&self) -> Result<usize> {
		let root = self.root()?;
		Ok(self.bytes.len() - root.end_offset())
	}

	/// Tally chunk statistics for the whole tree.
	pub fn scan_chunk_stats(&self, options: &WalkOptions) -> Result<ChunkStats> {
		scan_chunk_stats(self.root()?, options)
	}

	/// Resolve a chunk path, failing when nothing matches.
	pub fn find_chunk(&self, path: &ChunkPath) -> Result<Chunk<'_>> {
		find_chunk(self.root()?, path)?.ok_or_else(|| IffError::ChunkNotFound { path: path.to_string() })
	}
}
