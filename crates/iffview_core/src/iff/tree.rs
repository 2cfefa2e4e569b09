use crate::iff::{Chunk, IffError, Result, Tag, WalkOptions, walk_chunks};

/// Owned outline of one chunk and its descendants.
///
/// Only header metadata is kept; payload bytes stay in the source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkNode {
	/// Chunk identifier.
	pub id: Tag,
	/// Declared payload length.
	pub size: u32,
	/// Absolute buffer offset of the chunk header.
	pub offset: usize,
	/// Form type for FORM chunks.
	pub form_type: Option<Tag>,
	/// Decoded children in file order; empty for leaves.
	pub children: Vec<ChunkNode>,
}

impl ChunkNode {
	/// Deepest nesting an owned tree may hold, whatever `WalkOptions` asks
	/// for. Dropping and rendering a tree recurse once per level.
	pub const MAX_DEPTH: usize = 1024;

	/// Decode the full tree under `root`.
	///
	/// Traversal runs on [`walk_chunks`]; nodes are attached to their parent
	/// once the walk moves back up past them.
	pub fn build(root: Chunk<'_>, options: &WalkOptions) -> Result<Self> {
		let options = WalkOptions {
			max_depth: options.max_depth.min(Self::MAX_DEPTH),
		};

		let mut open: Vec<ChunkNode> = Vec::new();
		walk_chunks(root, &options, |item| {
			close_to_depth(&mut open, item.depth);
			open.push(Self {
				id: item.chunk.id,
				size: item.chunk.size,
				offset: item.chunk.offset,
				form_type: item.form_type,
				children: Vec::new(),
			});
			Ok(())
		})?;

		// The walk visits the root first, so `open` holds it at index 0.
		close_to_depth(&mut open, 1);
		open.pop().ok_or(IffError::TruncatedHeader {
			at: root.offset,
			rem: root.total_len(),
		})
	}

	/// Count this node plus all descendants.
	pub fn node_count(&self) -> usize {
		1 + self.children.iter().map(Self::node_count).sum::<usize>()
	}
}

/// Pop open nodes into their parents until `depth` nodes remain.
fn close_to_depth(open: &mut Vec<ChunkNode>, depth: usize) {
	while open.len() > depth {
		let Some(node) = open.pop() else {
			return;
		};
		if let Some(parent) = open.last_mut() {
			parent.children.push(node);
		}
	}
}
