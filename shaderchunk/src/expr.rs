//! Expression chunks.

use crate::chunk::{Chunk, Fragment};

/// Pre-built, typed expression.
///
/// An expression has no definition of its own: linking it links the chunks it references and yields its text, which
/// is pasted wherever the expression is used. The declared type is not checked; it lets libraries know what the
/// expression evaluates to.
///
/// # Examples
///
/// ```
/// use shaderchunk::{ExprChunk, TypeTag};
///
/// let natural = ExprChunk::new(TypeTag::F32).text("0.0");
/// ```
#[derive(Clone, Debug)]
pub struct ExprChunk {
  ty: Chunk,
  parts: Vec<Fragment>,
}

impl ExprChunk {
  pub fn new(ty: impl Into<Chunk>) -> Self {
    Self {
      ty: ty.into(),
      parts: Vec::new(),
    }
  }

  pub fn text(self, text: impl Into<String>) -> Self {
    self.fragment(Fragment::Text(text.into()))
  }

  pub fn chunk(self, chunk: impl Into<Chunk>) -> Self {
    self.fragment(Fragment::Chunk(chunk.into()))
  }

  pub fn fragment(mut self, fragment: impl Into<Fragment>) -> Self {
    self.parts.push(fragment.into());
    self
  }

  pub fn ty(&self) -> &Chunk {
    &self.ty
  }

  pub fn parts(&self) -> &[Fragment] {
    &self.parts
  }
}
