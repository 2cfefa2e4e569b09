use thiserror::Error;

use crate::iff::Tag;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, IffError>;

/// Errors produced while loading, decoding, and traversing IFF data.
#[derive(Debug, Error)]
pub enum IffError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Fewer than 8 bytes were available where a chunk header was expected.
	#[error("truncated chunk header at offset {at}: need 8 bytes, remaining {rem}")]
	TruncatedHeader {
		/// Byte offset where the header was expected.
		at: usize,
		/// Bytes still available in the enclosing region.
		rem: usize,
	},
	/// Declared payload size exceeds the space left in the enclosing region.
	#[error("chunk size {size} at offset {at} exceeds remaining {rem}")]
	InvalidChunkSize {
		/// Chunk header offset.
		at: usize,
		/// Declared payload size.
		size: u32,
		/// Bytes available after the header.
		rem: usize,
	},
	/// FORM-only operation was applied to another chunk kind.
	#[error("chunk {} at offset {at} is not a FORM", .id.printable())]
	NotAForm {
		/// Chunk header offset.
		at: usize,
		/// Actual chunk id.
		id: Tag,
	},
	/// FORM payload cannot hold its 4-byte form type.
	#[error("FORM at offset {at} too small for form type: size={size}")]
	FormTooSmall {
		/// Chunk header offset.
		at: usize,
		/// Declared payload size.
		size: u32,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Tag literal was not 1 to 4 printable ASCII characters.
	#[error("invalid tag: {tag:?}")]
	InvalidTag {
		/// User-provided tag string.
		tag: String,
	},
	/// Chunk path expression syntax is invalid.
	#[error("invalid chunk path: {path}")]
	InvalidChunkPath {
		/// Original user-provided path string.
		path: String,
	},
	/// No chunk matched a path expression.
	#[error("chunk not found: {path}")]
	ChunkNotFound {
		/// Path expression that failed to match.
		path: String,
	},
	/// Traversal nested deeper than the configured limit.
	#[error("walk depth exceeded (max={max_depth})")]
	WalkDepthExceeded {
		/// Configured depth ceiling.
		max_depth: usize,
	},
}
