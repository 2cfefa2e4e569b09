//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Encode a raw chunk header with an arbitrary declared size.
pub fn header(id: &[u8; 4], size: u32) -> Vec<u8> {
	let mut out = Vec::with_capacity(8);
	out.extend_from_slice(id);
	out.extend_from_slice(&size.to_be_bytes());
	out
}

/// Encode one well-formed leaf chunk.
pub fn chunk(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
	let size = u32::try_from(payload.len()).expect("test payload fits in u32");
	let mut out = header(id, size);
	out.extend_from_slice(payload);
	out
}

/// Encode a `FORM` chunk with the given form type and pre-encoded children.
pub fn form(form_type: &[u8; 4], children: &[Vec<u8>]) -> Vec<u8> {
	let mut payload = form_type.to_vec();
	for child in children {
		payload.extend_from_slice(child);
	}
	chunk(b"FORM", &payload)
}
