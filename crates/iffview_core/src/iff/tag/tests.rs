use crate::iff::{IffError, Tag};

#[test]
fn renders_ascii_bytes_verbatim() {
	let tag = Tag::new(*b"MSH2");
	assert_eq!(tag.to_string(), "MSH2");
	assert_eq!(Tag::new(*b"CAT ").to_string(), "CAT ");
}

#[test]
fn display_keeps_ascii_control_bytes() {
	let raw = [b'A', b'\t', 0x00, 0x7F];
	assert_eq!(Tag::new(raw).to_string().as_bytes(), raw);
}

#[test]
fn display_round_trips_every_ascii_byte() {
	for byte in 0_u8..0x80 {
		let raw = [byte, b'x', byte, b' '];
		assert_eq!(Tag::new(raw).to_string().as_bytes(), raw, "byte {byte:#04x}");
	}
}

#[test]
fn display_marks_non_ascii_bytes() {
	assert_eq!(Tag::new([b'A', 0x80, 0xFF, b'Z']).to_string(), "A??Z");
}

#[test]
fn printable_replaces_non_printable_bytes_with_dots() {
	assert_eq!(Tag::new([b'A', 0, 0x7F, b'Z']).printable(), "A..Z");
	assert_eq!(Tag::new([b'\t', 0x80, b' ', b'Q']).printable(), ".. Q");
	assert_eq!(Tag::new(*b"MSH2").printable(), "MSH2");
}

#[test]
fn integer_view_is_big_endian() {
	assert_eq!(Tag::FORM.as_u32(), 0x464F_524D);
	assert_eq!(Tag::from_u32(0x464F_524D), Tag::FORM);
}

#[test]
fn ordering_follows_bytes() {
	assert!(Tag::new(*b"AAAA") < Tag::new(*b"AAAB"));
	assert!(Tag::new(*b"B   ") > Tag::new(*b"AZZZ"));
}

#[test]
fn parses_short_literals_with_space_padding() {
	let tag: Tag = "CAT".parse().expect("short tag parses");
	assert_eq!(tag.as_bytes(), *b"CAT ");
	let tag: Tag = "0005".parse().expect("digit tag parses");
	assert_eq!(tag.as_bytes(), *b"0005");
}

#[test]
fn rejects_empty_long_and_non_ascii_literals() {
	for input in ["", "FORMS", "F\u{e9}", "A\tB"] {
		let err = input.parse::<Tag>().expect_err("invalid literal should fail");
		assert!(matches!(err, IffError::InvalidTag { .. }), "input {input:?}");
	}
}

#[test]
fn debug_escapes_raw_bytes() {
	assert_eq!(format!("{:?}", Tag::new([b'A', 0, b'B', b'C'])), "Tag(\"A\\x00BC\")");
}
