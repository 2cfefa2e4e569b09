use super::{hex_dump_lines, hex_string};
use crate::cmd::test_support::{fixture_arg, run_iffview, run_iffview_json, run_iffview_stdout};

#[test]
fn hex_dump_pads_short_rows() {
	let lines = hex_dump_lines(b"ab\x00", 4);
	assert_eq!(lines, ["00000000  61 62 00     |ab.|"]);
}

#[test]
fn hex_dump_offsets_advance_by_width() {
	let lines = hex_dump_lines(&[0x41; 5], 2);
	assert_eq!(lines.len(), 3);
	assert_eq!(lines[2], "00000004  41     |A|");
	assert_eq!(hex_string(&[0x00, 0xff, 0x10]), "00ff10");
}

#[test]
fn show_json_selects_nested_leaf() {
	let fixture = fixture_arg("wing_mesh.iff");
	let json = run_iffview_json(&["show", &fixture, "--path", "MESH/0005/GEOM[1]/VTXA", "--json"]);

	assert_eq!(json["chunk"], "MESH/0005/GEOM[1]/VTXA");
	assert_eq!(json["id"], "VTXA");
	assert_eq!(json["size"], 12);
	assert_eq!(json["offset"], 114);
	assert_eq!(json["payload_offset"], 122);
	assert!(json["form_type"].is_null());
	assert!(json["child_count"].is_null());
	assert_eq!(json["payload_hex"], "000000003f80000000000000");
	assert_eq!(json["truncated"], false);
}

#[test]
fn show_json_reports_form_children_and_truncation() {
	let fixture = fixture_arg("wing_mesh.iff");
	let json = run_iffview_json(&["show", &fixture, "--path", "MESH/0005", "--limit", "4", "--json"]);

	assert_eq!(json["form_type"], "0005");
	assert_eq!(json["child_count"], 3);
	assert_eq!(json["payload_hex"], "30303035");
	assert_eq!(json["truncated"], true);
}

#[test]
fn show_text_dumps_payload() {
	let fixture = fixture_arg("wing_mesh.iff");
	let stdout = run_iffview_stdout(&["show", &fixture, "--path", "MESH/NAME"]);

	assert!(stdout.contains("id: NAME\n"), "{stdout}");
	assert!(stdout.contains("61 5f 77 69 6e 67 00"), "{stdout}");
	assert!(stdout.contains("|a_wing.|"), "{stdout}");
}

#[test]
fn show_missing_chunk_fails() {
	let fixture = fixture_arg("wing_mesh.iff");
	let output = run_iffview(&["show", &fixture, "--path", "MESH/SKEL"]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("chunk not found: MESH/SKEL"), "{stderr}");
}
