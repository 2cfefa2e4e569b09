use std::path::Path;

use iffview::iff::{IffFile, Result, Tag};

/// Load a file and log what was read.
pub(crate) fn open_file(path: &Path) -> Result<IffFile> {
	let file = IffFile::open(path)?;
	tracing::debug!(
		path = %path.display(),
		compression = file.compression.as_str(),
		bytes = file.bytes().len(),
		"loaded iff buffer"
	);
	Ok(file)
}

/// Render an optional tag, using `-` for none.
pub(crate) fn tag_label(tag: Option<Tag>) -> String {
	tag.map(|tag| tag.printable()).unwrap_or_else(|| "-".to_owned())
}

/// Pretty-print a serializable payload to stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json: {err}"),
	}
}
