mod bytes;
mod chunk;
mod compression;
mod error;
mod file;
mod form;
mod iter;
mod path;
mod stats;
mod tag;
mod tree;
mod walk;

/// Zero-copy chunk view and header size constant.
pub use chunk::{CHUNK_HEADER_LEN, Chunk};
/// Compression detection result.
pub use compression::Compression;
/// Error and result aliases.
pub use error::{IffError, Result};
/// File abstraction over one resident IFF buffer.
pub use file::IffFile;
/// Size of the form-type prefix inside a FORM payload.
pub use form::FORM_TYPE_LEN;
/// Sibling chunk iterator.
pub use iter::ChunkIter;
/// Chunk path parser and lookup.
pub use path::{ChunkPath, PathStep, find_chunk};
/// Whole-tree chunk statistics.
pub use stats::{ChunkStats, scan_chunk_stats};
/// Four-byte chunk identifier.
pub use tag::Tag;
/// Owned metadata outline of a chunk tree.
pub use tree::ChunkNode;
/// Depth-first traversal types and entry points.
pub use walk::{WalkItem, WalkOptions, walk_chunks};
