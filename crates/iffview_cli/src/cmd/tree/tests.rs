use crate::cmd::test_support::{fixture_arg, run_iffview, run_iffview_json, run_iffview_stdout};

#[test]
fn tree_text_lists_chunks_depth_first() {
	let fixture = fixture_arg("wing_mesh.iff");
	let stdout = run_iffview_stdout(&["tree", &fixture]);

	let lines: Vec<_> = stdout.lines().collect();
	assert_eq!(lines.len(), 10);
	assert_eq!(lines[0], "FORM Size: 155 Form Type: MESH");
	assert_eq!(lines[1], " FORM Size: 128 Form Type: 0005");
	assert_eq!(lines[2], "  SINF Size: 12");
	assert_eq!(lines[4], "   VTXA Size: 24");
	assert_eq!(lines[9], " NAME Size: 7");
}

#[test]
fn tree_json_nests_children() {
	let fixture = fixture_arg("wing_mesh.iff");
	let json = run_iffview_json(&["tree", &fixture, "--json"]);

	assert_eq!(json["id"], "FORM");
	assert_eq!(json["form_type"], "MESH");
	let children = json["children"].as_array().expect("root children");
	assert_eq!(children.len(), 2);
	assert_eq!(children[0]["form_type"], "0005");
	assert_eq!(children[0]["children"].as_array().map(Vec::len), Some(3));
	assert_eq!(children[1]["id"], "NAME");
	assert!(children[1]["form_type"].is_null());
	assert_eq!(children[1]["offset"], 148);
}

#[test]
fn tree_depth_limit_fails_walk() {
	let fixture = fixture_arg("wing_mesh.iff");
	let output = run_iffview(&["tree", &fixture, "--max-depth", "2"]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("walk depth exceeded (max=2)"), "{stderr}");
}

#[test]
fn tree_renders_control_bytes_in_tags_as_dots() {
	let fixture = fixture_arg("control_tags.iff");
	let stdout = run_iffview_stdout(&["tree", &fixture]);
	assert_eq!(stdout, "FORM Size: 13 Form Type: TE.T\n A.BC Size: 1\n");

	let json = run_iffview_json(&["tree", &fixture, "--json"]);
	assert_eq!(json["form_type"], "TE.T");
	assert_eq!(json["children"][0]["id"], "A.BC");
}
