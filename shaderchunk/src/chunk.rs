//! Chunks and fragments.
//!
//! A [`Chunk`] is an immutable piece of WGSL: a type, a function, a struct, an array, an expression or an attribute.
//! Chunks are cheap to clone and cloning one shares it: the clone _is_ the same chunk as far as the
//! [linker](crate::link) is concerned. Two chunks built separately are always different chunks, even if every one of
//! their fields are equal.

use std::sync::Arc;

use crate::{
  array::ArrayChunk, attr::Attribute, expr::ExprChunk, fun::FnChunk, structure::StructChunk, types::TypeTag,
};

/// Shader chunk.
#[derive(Clone, Debug)]
pub enum Chunk {
  /// Scalar or vector type.
  Type(TypeTag),

  /// Function definition.
  Fn(Arc<FnChunk>),

  /// Struct definition.
  Struct(Arc<StructChunk>),

  /// Fixed-size array type, always rendered inline.
  Array(Arc<ArrayChunk>),

  /// Pre-built expression, always rendered inline.
  Expr(Arc<ExprChunk>),

  /// Attribute, only meaningful attached to a function or a struct field.
  Attribute(Arc<Attribute>),

  /// Chunk of a kind this crate doesn’t know about.
  ///
  /// Such chunks can be carried around but fail to link.
  Foreign(Arc<str>),
}

impl Chunk {
  /// Kind of the chunk, e.g. `wgsl:fn` or `wgsl:vec3f`.
  pub fn kind(&self) -> &str {
    match self {
      Chunk::Type(tag) => tag.kind(),
      Chunk::Fn(_) => "wgsl:fn",
      Chunk::Struct(_) => "wgsl:struct",
      Chunk::Array(_) => "wgsl:array",
      Chunk::Expr(_) => "wgsl:expr",
      Chunk::Attribute(_) => "wgsl:attribute",
      Chunk::Foreign(kind) => &**kind,
    }
  }

  /// Create a chunk of an unknown kind.
  pub fn foreign(kind: impl Into<Arc<str>>) -> Self {
    Chunk::Foreign(kind.into())
  }

  /// Identity of the chunk.
  ///
  /// Type tags have no identity.
  pub fn id(&self) -> Option<ChunkId> {
    let ptr = match self {
      Chunk::Type(_) => return None,
      Chunk::Fn(fun) => Arc::as_ptr(fun) as *const (),
      Chunk::Struct(st) => Arc::as_ptr(st) as *const (),
      Chunk::Array(array) => Arc::as_ptr(array) as *const (),
      Chunk::Expr(expr) => Arc::as_ptr(expr) as *const (),
      Chunk::Attribute(attr) => Arc::as_ptr(attr) as *const (),
      Chunk::Foreign(kind) => Arc::as_ptr(kind) as *const u8 as *const (),
    };

    Some(ChunkId(ptr as usize))
  }

  /// Whether both chunks are the very same chunk.
  ///
  /// This is identity, not structural equality. Type tags are the same chunk when they are the same tag.
  pub fn same_as(&self, other: &Chunk) -> bool {
    match (self, other) {
      (Chunk::Type(a), Chunk::Type(b)) => a == b,
      _ => self.id().is_some() && self.id() == other.id(),
    }
  }
}

/// Identity of a [`Chunk`].
///
/// Only valid as long as the chunk is alive.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ChunkId(usize);

impl From<TypeTag> for Chunk {
  fn from(tag: TypeTag) -> Self {
    Chunk::Type(tag)
  }
}

macro_rules! impl_From_chunk {
  ($t:ty, $variant:ident) => {
    impl From<$t> for Chunk {
      fn from(a: $t) -> Self {
        Chunk::$variant(Arc::new(a))
      }
    }

    impl From<Arc<$t>> for Chunk {
      fn from(a: Arc<$t>) -> Self {
        Chunk::$variant(a)
      }
    }
  };
}

impl_From_chunk!(FnChunk, Fn);
impl_From_chunk!(StructChunk, Struct);
impl_From_chunk!(ArrayChunk, Array);
impl_From_chunk!(ExprChunk, Expr);
impl_From_chunk!(Attribute, Attribute);

/// Borrow something as a [`Chunk`].
///
/// This is what the builder macros use for interpolations, so that interpolating the same chunk twice shares it
/// instead of moving it.
pub trait AsChunk {
  fn to_chunk(&self) -> Chunk;
}

impl AsChunk for Chunk {
  fn to_chunk(&self) -> Chunk {
    self.clone()
  }
}

impl AsChunk for TypeTag {
  fn to_chunk(&self) -> Chunk {
    Chunk::Type(*self)
  }
}

impl<T> AsChunk for &T
where
  T: AsChunk + ?Sized,
{
  fn to_chunk(&self) -> Chunk {
    (**self).to_chunk()
  }
}

/// Either literal text or a chunk.
///
/// Function bodies, expressions, attribute parameters and the roots given to the linker are sequences of fragments.
#[derive(Clone, Debug)]
pub enum Fragment {
  Text(String),
  Chunk(Chunk),
}

impl From<&str> for Fragment {
  fn from(text: &str) -> Self {
    Fragment::Text(text.to_owned())
  }
}

impl From<String> for Fragment {
  fn from(text: String) -> Self {
    Fragment::Text(text)
  }
}

impl From<Chunk> for Fragment {
  fn from(chunk: Chunk) -> Self {
    Fragment::Chunk(chunk)
  }
}

impl From<&Chunk> for Fragment {
  fn from(chunk: &Chunk) -> Self {
    Fragment::Chunk(chunk.clone())
  }
}

impl From<TypeTag> for Fragment {
  fn from(tag: TypeTag) -> Self {
    Fragment::Chunk(Chunk::Type(tag))
  }
}
