use crate::iff::{Chunk, ChunkIter, IffError, Result, Tag};

/// Bytes taken by the form-type tag at the start of a FORM payload.
pub const FORM_TYPE_LEN: usize = 4;

impl<'a> Chunk<'a> {
	/// Return `true` when this is a `FORM` container chunk.
	pub fn is_form(&self) -> bool {
		self.id == Tag::FORM
	}

	/// Read the form-type tag stored in the first 4 payload bytes.
	pub fn form_type(&self) -> Result<Tag> {
		let body = self.form_body()?;
		Tag::from_prefix(body).ok_or(IffError::FormTooSmall {
			at: self.offset,
			size: self.size,
		})
	}

	/// Iterate the child chunks that follow the form-type tag.
	pub fn children(&self) -> Result<ChunkIter<'a>> {
		let body = self.form_body()?;
		let children = &body[FORM_TYPE_LEN..];
		Ok(ChunkIter::over(children, self.payload_offset() + FORM_TYPE_LEN, children.len()))
	}

	/// Return the first child, or `None` for a FORM without children.
	pub fn first_child(&self) -> Result<Option<Chunk<'a>>> {
		self.children()?.next().transpose()
	}

	fn form_body(&self) -> Result<&'a [u8]> {
		if !self.is_form() {
			return Err(IffError::NotAForm { at: self.offset, id: self.id });
		}
		if self.payload.len() < FORM_TYPE_LEN {
			return Err(IffError::FormTooSmall {
				at: self.offset,
				size: self.size,
			});
		}
		Ok(self.payload)
	}
}
