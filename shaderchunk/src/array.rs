use crate::chunk::Chunk;

/// Fixed-size array type.
///
/// Arrays are never named: they are written inline as `array<T, N>` wherever they are used.
#[derive(Clone, Debug)]
pub struct ArrayChunk {
  elem: Chunk,
  count: usize,
}

impl ArrayChunk {
  pub fn new(elem: impl Into<Chunk>, count: usize) -> Self {
    Self {
      elem: elem.into(),
      count,
    }
  }

  pub fn elem(&self) -> &Chunk {
    &self.elem
  }

  pub fn count(&self) -> usize {
    self.count
  }
}
