use std::collections::HashMap;
use std::path::PathBuf;

use iffview::iff::{Result, Tag, WalkOptions};

use crate::cmd::util::{emit_json, open_file, tag_label};

const TOP_LIMIT: usize = 12;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print top-level chunk details and tree statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let file = open_file(&path)?;
	let root = file.root()?;
	let form_type = if root.is_form() { Some(root.form_type()?) } else { None };
	let trailing = file.trailing_len()?;
	let stats = file.scan_chunk_stats(&WalkOptions::default())?;
	tracing::info!(chunks = stats.chunk_count, forms = stats.form_count, "scanned chunk tree");

	let top_ids = top_counts(&stats.ids);
	let top_form_types = top_counts(&stats.form_types);

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			compression: file.compression.as_str().to_owned(),
			buffer_len: file.bytes().len(),
			root_id: root.id.printable(),
			root_size: root.size,
			form_type: form_type.map(|tag| tag.printable()),
			trailing_bytes: trailing,
			chunk_count: stats.chunk_count,
			form_count: stats.form_count,
			leaf_count: stats.leaf_count,
			max_depth: stats.max_depth,
			leaf_payload_bytes: stats.leaf_payload_bytes,
			top_ids: to_json_counts(&top_ids),
			top_form_types: to_json_counts(&top_form_types),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("compression: {}", file.compression.as_str());
	println!("buffer_len: {}", file.bytes().len());
	println!("root_id: {}", root.id.printable());
	println!("root_size: {}", root.size);
	println!("form_type: {}", tag_label(form_type));
	println!("trailing_bytes: {trailing}");
	println!("chunk_count: {}", stats.chunk_count);
	println!("form_count: {}", stats.form_count);
	println!("leaf_count: {}", stats.leaf_count);
	println!("max_depth: {}", stats.max_depth);
	println!("leaf_payload_bytes: {}", stats.leaf_payload_bytes);

	println!("top_ids:");
	for (tag, count) in &top_ids {
		println!("  {}: {count}", tag.printable());
	}
	println!("top_form_types:");
	for (tag, count) in &top_form_types {
		println!("  {}: {count}", tag.printable());
	}

	Ok(())
}

fn top_counts(counts: &HashMap<Tag, u32>) -> Vec<(Tag, u32)> {
	let mut entries: Vec<_> = counts.iter().map(|(tag, count)| (*tag, *count)).collect();
	entries.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));
	entries.truncate(TOP_LIMIT);
	entries
}

fn to_json_counts(entries: &[(Tag, u32)]) -> Vec<TagCountJson> {
	entries
		.iter()
		.map(|(tag, count)| TagCountJson {
			tag: tag.printable(),
			count: *count,
		})
		.collect()
}

#[derive(serde::Serialize)]
struct TagCountJson {
	tag: String,
	count: u32,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: String,
	buffer_len: usize,
	root_id: String,
	root_size: u32,
	form_type: Option<String>,
	trailing_bytes: usize,
	chunk_count: u32,
	form_count: u32,
	leaf_count: u32,
	max_depth: usize,
	leaf_payload_bytes: u64,
	top_ids: Vec<TagCountJson>,
	top_form_types: Vec<TagCountJson>,
}
