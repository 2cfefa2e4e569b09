use std::collections::HashMap;

use crate::iff::{Chunk, Result, Tag, WalkOptions, walk_chunks};

/// Aggregate counts for one chunk tree.
#[derive(Debug, Clone, Default)]
pub struct ChunkStats {
	/// Total chunks visited, root included.
	pub chunk_count: u32,
	/// Number of FORM chunks.
	pub form_count: u32,
	/// Number of non-FORM chunks.
	pub leaf_count: u32,
	/// Deepest nesting level seen; the root is 0.
	pub max_depth: usize,
	/// Sum of declared payload sizes over leaf chunks.
	pub leaf_payload_bytes: u64,
	/// Occurrences per chunk id.
	pub ids: HashMap<Tag, u32>,
	/// Occurrences per FORM form type.
	pub form_types: HashMap<Tag, u32>,
}

/// Walk the tree under `root` and tally chunk counts.
pub fn scan_chunk_stats(root: Chunk<'_>, options: &WalkOptions) -> Result<ChunkStats> {
	let mut stats = ChunkStats::default();

	walk_chunks(root, options, |item| {
		stats.chunk_count += 1;
		stats.max_depth = stats.max_depth.max(item.depth);
		*stats.ids.entry(item.chunk.id).or_insert(0) += 1;

		match item.form_type {
			Some(form_type) => {
				stats.form_count += 1;
				*stats.form_types.entry(form_type).or_insert(0) += 1;
			}
			None => {
				stats.leaf_count += 1;
				stats.leaf_payload_bytes += u64::from(item.chunk.size);
			}
		}
		Ok(())
	})?;

	Ok(stats)
}
