use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use iffview_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static IFFVIEW_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_arg(name: &str) -> String {
	shared_fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_iffview(args: &[&str]) -> Output {
	Command::new(iffview_bin()).args(args).output().expect("iffview command executes")
}

pub(crate) fn run_iffview_with_log(args: &[&str], rust_log: Option<&str>) -> Output {
	let mut command = Command::new(iffview_bin());
	command.args(args);
	match rust_log {
		Some(filter) => command.env("RUST_LOG", filter),
		None => command.env_remove("RUST_LOG"),
	};
	command.output().expect("iffview command executes")
}

pub(crate) fn run_iffview_stdout(args: &[&str]) -> String {
	let output = run_iffview(args);
	assert!(
		output.status.success(),
		"iffview command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout).expect("stdout should be utf-8")
}

pub(crate) fn run_iffview_json(args: &[&str]) -> serde_json::Value {
	let stdout = run_iffview_stdout(args);
	serde_json::from_str(&stdout).expect("stdout should be valid json")
}

fn iffview_bin() -> &'static PathBuf {
	IFFVIEW_BIN.get_or_init(resolve_iffview_bin)
}

fn resolve_iffview_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_iffview") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "iffview.exe" } else { "iffview" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "iffview"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build iffview binary at {}", bin.display());

	bin
}
