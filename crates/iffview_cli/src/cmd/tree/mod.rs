use std::path::PathBuf;

use iffview::iff::{ChunkNode, Result, WalkOptions, walk_chunks};

use crate::cmd::util::{emit_json, open_file};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long = "max-depth")]
	pub max_depth: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Print every chunk depth-first, one space of indent per level.
pub fn run(args: Args) -> Result<()> {
	let Args { path, max_depth, json } = args;

	let mut options = WalkOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	let file = open_file(&path)?;
	let root = file.root()?;

	if json {
		let tree = ChunkNode::build(root, &options)?;
		tracing::info!(chunks = tree.node_count(), "built chunk tree");
		emit_json(&ChunkNodeJson::from(&tree));
		return Ok(());
	}

	let mut lines = Vec::new();
	walk_chunks(root, &options, |item| {
		let mut line = format!("{}{} Size: {}", " ".repeat(item.depth), item.chunk.id.printable(), item.chunk.size);
		if let Some(form_type) = item.form_type {
			line.push_str(&format!(" Form Type: {}", form_type.printable()));
		}
		lines.push(line);
		Ok(())
	})?;

	for line in &lines {
		println!("{line}");
	}
	tracing::info!(chunks = lines.len(), "walked chunk tree");

	Ok(())
}

#[derive(serde::Serialize)]
struct ChunkNodeJson {
	id: String,
	size: u32,
	offset: usize,
	form_type: Option<String>,
	children: Vec<ChunkNodeJson>,
}

impl From<&ChunkNode> for ChunkNodeJson {
	fn from(node: &ChunkNode) -> Self {
		Self {
			id: node.id.printable(),
			size: node.size,
			offset: node.offset,
			form_type: node.form_type.map(|tag| tag.printable()),
			children: node.children.iter().map(Self::from).collect(),
		}
	}
}

#[cfg(test)]
mod tests;
