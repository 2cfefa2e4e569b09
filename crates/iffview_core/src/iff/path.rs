use std::fmt;

use crate::iff::{Chunk, IffError, Result, Tag};

/// One `/`-separated step of a chunk path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
	/// Tag compared against chunk id, or form type for FORMs.
	pub tag: Tag,
	/// Zero-based occurrence among matching siblings.
	pub index: usize,
}

impl PathStep {
	/// Return whether `chunk` is selected by this step's tag.
	pub fn matches(&self, chunk: &Chunk<'_>) -> Result<bool> {
		if chunk.id == self.tag {
			return Ok(true);
		}
		Ok(chunk.is_form() && chunk.form_type()? == self.tag)
	}
}

/// Parsed chunk path such as `MESH/GEOM[1]/VTXA`.
///
/// The first step selects the root chunk itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl ChunkPath {
	/// Parse slash-separated tags with optional `[index]` selectors.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || IffError::InvalidChunkPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let mut steps = Vec::new();
		for segment in input.split('/') {
			let (name, index) = match segment.split_once('[') {
				Some((name, rest)) => {
					let digits = rest.strip_suffix(']').ok_or_else(invalid)?;
					if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
						return Err(invalid());
					}
					(name, digits.parse::<usize>().map_err(|_| invalid())?)
				}
				None => (segment, 0),
			};

			let tag = name.parse::<Tag>().map_err(|_| invalid())?;
			steps.push(PathStep { tag, index });
		}

		Ok(Self { steps })
	}
}

impl fmt::Display for ChunkPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, step) in self.steps.iter().enumerate() {
			if idx > 0 {
				f.write_str("/")?;
			}
			write!(f, "{}", step.tag.to_string().trim_end())?;
			if step.index > 0 {
				write!(f, "[{}]", step.index)?;
			}
		}
		Ok(())
	}
}

/// Resolve `path` starting at `root`.
///
/// Returns `Ok(None)` when a step matches nothing; decode errors met on the
/// way are propagated.
pub fn find_chunk<'a>(root: Chunk<'a>, path: &ChunkPath) -> Result<Option<Chunk<'a>>> {
	let Some((first, rest)) = path.steps.split_first() else {
		return Ok(None);
	};
	if first.index != 0 || !first.matches(&root)? {
		return Ok(None);
	}

	let mut current = root;
	for step in rest {
		if !current.is_form() {
			return Ok(None);
		}

		let mut seen = 0_usize;
		let mut found = None;
		for child in current.children()? {
			let child = child?;
			if !step.matches(&child)? {
				continue;
			}
			if seen == step.index {
				found = Some(child);
				break;
			}
			seen += 1;
		}

		match found {
			Some(child) => current = child,
			None => return Ok(None),
		}
	}

	Ok(Some(current))
}
