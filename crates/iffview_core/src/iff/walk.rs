use crate::iff::{Chunk, ChunkIter, IffError, Result, Tag};

/// Traversal limits for depth-first chunk walks.
#[derive(Debug, Clone, Copy)]
pub struct WalkOptions {
	/// Deepest nesting level visited; the root is depth 0.
	pub max_depth: usize,
}

impl Default for WalkOptions {
	fn default() -> Self {
		Self { max_depth: 256 }
	}
}

/// One chunk visited during a walk.
#[derive(Debug, Clone, Copy)]
pub struct WalkItem<'a> {
	/// Decoded chunk view.
	pub chunk: Chunk<'a>,
	/// Nesting depth, 0 for the root.
	pub depth: usize,
	/// Form type when `chunk` is a FORM.
	pub form_type: Option<Tag>,
}

/// Visit `root` and every descendant in file order, parents before children.
///
/// Stops at the first decode error or the first error returned by `visit`.
pub fn walk_chunks<'a, F>(root: Chunk<'a>, options: &WalkOptions, mut visit: F) -> Result<()>
where
	F: FnMut(&WalkItem<'a>) -> Result<()>,
{
	let mut stack: Vec<ChunkIter<'a>> = Vec::new();
	if let Some(children) = visit_one(root, 0, options, &mut visit)? {
		stack.push(children);
	}

	while let Some(siblings) = stack.last_mut() {
		let Some(next) = siblings.next() else {
			stack.pop();
			continue;
		};

		let chunk = next?;
		let depth = stack.len();
		if let Some(children) = visit_one(chunk, depth, options, &mut visit)? {
			stack.push(children);
		}
	}

	Ok(())
}

fn visit_one<'a, F>(chunk: Chunk<'a>, depth: usize, options: &WalkOptions, visit: &mut F) -> Result<Option<ChunkIter<'a>>>
where
	F: FnMut(&WalkItem<'a>) -> Result<()>,
{
	if depth > options.max_depth {
		return Err(IffError::WalkDepthExceeded { max_depth: options.max_depth });
	}

	let form_type = if chunk.is_form() { Some(chunk.form_type()?) } else { None };
	visit(&WalkItem { chunk, depth, form_type })?;

	if form_type.is_some() { Ok(Some(chunk.children()?)) } else { Ok(None) }
}
