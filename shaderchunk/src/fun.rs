//! Function chunks.

use crate::{
  attr::Attribute,
  chunk::{Chunk, Fragment},
};

/// Function definition.
///
/// A function has a name hint, ordered arguments, a return type and a body. The body is a sequence of
/// [`Fragment`]s: literal WGSL text interleaved with other chunks, which get replaced by their linked names. The body
/// is pasted as-is after the signature, so it must bring its own braces.
///
/// # Examples
///
/// ```
/// use shaderchunk::{Chunk, FnChunk, TypeTag};
///
/// let add = Chunk::from(
///   FnChunk::new("addF32", TypeTag::F32)
///     .arg("a", TypeTag::F32)
///     .arg("b", TypeTag::F32)
///     .text("{\n  return a + b;\n}"),
/// );
/// ```
#[derive(Clone, Debug)]
pub struct FnChunk {
  name_hint: String,
  args: Vec<FnArg>,
  return_type: Chunk,
  body: Vec<Fragment>,
  attribs: Vec<Attribute>,
}

impl FnChunk {
  /// Create a function without arguments and with an empty body.
  ///
  /// An empty `name_hint` is allowed; the linker will pick a generic name.
  pub fn new(name_hint: impl Into<String>, return_type: impl Into<Chunk>) -> Self {
    Self {
      name_hint: name_hint.into(),
      args: Vec::new(),
      return_type: return_type.into(),
      body: Vec::new(),
      attribs: Vec::new(),
    }
  }

  /// Append an argument.
  pub fn arg(self, name: impl Into<String>, ty: impl Into<Chunk>) -> Self {
    self.arg_with(FnArg::new(name, ty))
  }

  /// Append a fully built argument.
  pub fn arg_with(mut self, arg: FnArg) -> Self {
    self.args.push(arg);
    self
  }

  /// Append literal text to the body.
  pub fn text(self, text: impl Into<String>) -> Self {
    self.fragment(Fragment::Text(text.into()))
  }

  /// Append a chunk reference to the body.
  pub fn chunk(self, chunk: impl Into<Chunk>) -> Self {
    self.fragment(Fragment::Chunk(chunk.into()))
  }

  /// Append a fragment to the body.
  pub fn fragment(mut self, fragment: impl Into<Fragment>) -> Self {
    self.body.push(fragment.into());
    self
  }

  /// Attach an attribute.
  pub fn attr(mut self, attr: Attribute) -> Self {
    self.attribs.push(attr);
    self
  }

  pub fn name_hint(&self) -> &str {
    &self.name_hint
  }

  pub fn args(&self) -> &[FnArg] {
    &self.args
  }

  pub fn return_type(&self) -> &Chunk {
    &self.return_type
  }

  pub fn body(&self) -> &[Fragment] {
    &self.body
  }

  pub fn attribs(&self) -> &[Attribute] {
    &self.attribs
  }
}

/// Function argument.
#[derive(Clone, Debug)]
pub struct FnArg {
  name: String,
  ty: Chunk,
  attribs: Vec<Attribute>,
}

impl FnArg {
  pub fn new(name: impl Into<String>, ty: impl Into<Chunk>) -> Self {
    Self {
      name: name.into(),
      ty: ty.into(),
      attribs: Vec::new(),
    }
  }

  /// Attach an attribute.
  ///
  /// Argument attributes are kept on the chunk for libraries that inspect them, but are not rendered by the linker.
  pub fn attr(mut self, attr: Attribute) -> Self {
    self.attribs.push(attr);
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn ty(&self) -> &Chunk {
    &self.ty
  }

  pub fn attribs(&self) -> &[Attribute] {
    &self.attribs
  }
}
