use std::fmt;
use std::str::FromStr;

use crate::iff::IffError;

/// Four-byte chunk identifier.
///
/// Bytes are kept in file order. Comparing tags compares the bytes, which is
/// the same as comparing their big-endian integer value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag([u8; 4]);

impl Tag {
	/// Reserved id of the recursive container chunk.
	pub const FORM: Tag = Tag(*b"FORM");

	/// Wrap four raw bytes.
	pub const fn new(bytes: [u8; 4]) -> Self {
		Self(bytes)
	}

	/// Return the raw bytes in file order.
	pub const fn as_bytes(&self) -> [u8; 4] {
		self.0
	}

	/// Integer view of the tag, read big-endian on every host.
	pub const fn as_u32(&self) -> u32 {
		u32::from_be_bytes(self.0)
	}

	/// Build a tag from its big-endian integer value.
	pub const fn from_u32(value: u32) -> Self {
		Self(value.to_be_bytes())
	}

	/// Terminal-safe label: bytes outside printable ASCII render as `.`.
	pub fn printable(&self) -> String {
		self.0
			.iter()
			.map(|byte| if byte.is_ascii_graphic() || *byte == b' ' { char::from(*byte) } else { '.' })
			.collect()
	}

	pub(crate) fn from_prefix(bytes: &[u8]) -> Option<Self> {
		let raw: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
		Some(Self(raw))
	}
}

impl From<[u8; 4]> for Tag {
	fn from(bytes: [u8; 4]) -> Self {
		Self(bytes)
	}
}

/// Writes ASCII bytes verbatim, control characters included; bytes above
/// `0x7F` render as `?`.
impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for byte in self.0 {
			let ch = if byte.is_ascii() { char::from(byte) } else { '?' };
			write!(f, "{ch}")?;
		}
		Ok(())
	}
}

impl fmt::Debug for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Tag(\"{}\")", self.0.escape_ascii())
	}
}

impl FromStr for Tag {
	type Err = IffError;

	/// Parse 1 to 4 printable ASCII characters, padding with spaces.
	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let valid = !value.is_empty() && value.len() <= 4 && value.bytes().all(|byte| byte.is_ascii_graphic() || byte == b' ');
		if !valid {
			return Err(IffError::InvalidTag { tag: value.to_owned() });
		}

		let mut out = [b' '; 4];
		out[..value.len()].copy_from_slice(value.as_bytes());
		Ok(Self(out))
	}
}

#[cfg(test)]
mod tests;
