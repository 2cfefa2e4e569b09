use std::path::PathBuf;

use iffview::iff::{ChunkPath, Result};

use crate::cmd::util::{emit_json, open_file, tag_label};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long = "path")]
	pub path_expr: String,
	#[arg(long)]
	pub limit: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// Payload hex dump limits.
#[derive(Debug, Clone, Copy)]
pub struct DumpOptions {
	/// Maximum payload bytes rendered.
	pub limit: usize,
	/// Bytes per dump row.
	pub width: usize,
}

impl Default for DumpOptions {
	fn default() -> Self {
		Self { limit: 256, width: 16 }
	}
}

/// Print one chunk's header fields and payload bytes.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file: path,
		path_expr,
		limit,
		json,
	} = args;

	let mut dump = DumpOptions::default();
	if let Some(limit) = limit {
		dump.limit = limit;
	}

	let chunk_path = ChunkPath::parse(&path_expr)?;
	let file = open_file(&path)?;
	let chunk = file.find_chunk(&chunk_path)?;
	let form_type = if chunk.is_form() { Some(chunk.form_type()?) } else { None };
	let child_count = match form_type {
		Some(_) => Some(chunk.children()?.try_fold(0_usize, |count, child| child.map(|_| count + 1))?),
		None => None,
	};

	let shown = &chunk.payload[..chunk.payload.len().min(dump.limit)];

	if json {
		let payload = ShowJson {
			path: path.display().to_string(),
			chunk: chunk_path.to_string(),
			id: chunk.id.printable(),
			size: chunk.size,
			offset: chunk.offset,
			payload_offset: chunk.payload_offset(),
			form_type: form_type.map(|tag| tag.printable()),
			child_count,
			payload_hex: hex_string(shown),
			truncated: shown.len() < chunk.payload.len(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("chunk: {chunk_path}");
	println!("id: {}", chunk.id.printable());
	println!("size: {}", chunk.size);
	println!("offset: {}", chunk.offset);
	println!("payload_offset: {}", chunk.payload_offset());
	println!("form_type: {}", tag_label(form_type));
	if let Some(child_count) = child_count {
		println!("children: {child_count}");
	}
	println!("payload:");
	for line in hex_dump_lines(shown, dump.width) {
		println!("  {line}");
	}
	if shown.len() < chunk.payload.len() {
		println!("  ... {} more bytes", chunk.payload.len() - shown.len());
	}

	Ok(())
}

fn hex_string(bytes: &[u8]) -> String {
	bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Render `offset  hex bytes  |ascii|` rows.
fn hex_dump_lines(bytes: &[u8], width: usize) -> Vec<String> {
	let width = width.max(1);
	bytes
		.chunks(width)
		.enumerate()
		.map(|(row, part)| {
			let hex: Vec<_> = part.iter().map(|byte| format!("{byte:02x}")).collect();
			let ascii: String = part
				.iter()
				.map(|byte| if byte.is_ascii_graphic() || *byte == b' ' { char::from(*byte) } else { '.' })
				.collect();
			format!("{:08x}  {:<pad$}  |{}|", row * width, hex.join(" "), ascii, pad = width * 3 - 1)
		})
		.collect()
}

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	chunk: String,
	id: String,
	size: u32,
	offset: usize,
	payload_offset: usize,
	form_type: Option<String>,
	child_count: Option<usize>,
	payload_hex: String,
	truncated: bool,
}

#[cfg(test)]
mod tests;
