//! The linker.
//!
//! Linking walks the chunks reachable from a list of roots and produces two pieces of WGSL:
//!
//! - The _definitions_: every function and struct reached, each written exactly once under a unique name. A
//!   definition is always written after the definitions it depends on.
//! - The _expression_: the roots, with every chunk replaced by its name (or by its inline text for types, arrays and
//!   expressions), ready to be pasted at a call site.
//!
//! Chunks are deduplicated by identity: a chunk reached several times is defined once and referenced by the same name
//! everywhere. Two chunks built separately are two definitions, even if they look the same.
//!
//! # Examples
//!
//! ```
//! use shaderchunk::{link, Chunk, FnChunk, LinkOptions, TypeTag};
//!
//! let add = Chunk::from(
//!   FnChunk::new("addF32", TypeTag::F32)
//!     .arg("a", TypeTag::F32)
//!     .arg("b", TypeTag::F32)
//!     .text("{\n  return a + b;\n}"),
//! );
//!
//! let result = link(
//!   &LinkOptions::new()
//!     .chunk(add.clone())
//!     .text("(1, ")
//!     .chunk(add)
//!     .text("(2, 3))"),
//! )
//! .unwrap();
//!
//! assert_eq!(result.expression, "addF32(1, addF32(2, 3))");
//! assert_eq!(
//!   result.definitions,
//!   "fn addF32(a: f32, b: f32) -> f32 {\n  return a + b;\n}\n"
//! );
//! ```

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::{
  array::ArrayChunk,
  attr::Attribute,
  chunk::{Chunk, ChunkId, Fragment},
  error::LinkError,
  expr::ExprChunk,
  fun::FnChunk,
  structure::StructChunk,
  writer::wgsl::{self, FieldDef, FnDef, StructDef},
};

/// Name given to functions and structs that don’t have a name hint.
pub const DEFAULT_NAME_HINT: &str = "item";

/// What to link.
#[derive(Clone, Debug, Default)]
pub struct LinkOptions {
  /// Roots, in order. Text is copied verbatim into the expression.
  pub chunks: Vec<Fragment>,
}

impl LinkOptions {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a chunk root.
  pub fn chunk(self, chunk: impl Into<Chunk>) -> Self {
    self.fragment(Fragment::Chunk(chunk.into()))
  }

  /// Append a text root.
  pub fn text(self, text: impl Into<String>) -> Self {
    self.fragment(Fragment::Text(text.into()))
  }

  pub fn fragment(mut self, fragment: impl Into<Fragment>) -> Self {
    self.chunks.push(fragment.into());
    self
  }
}

impl From<Vec<Fragment>> for LinkOptions {
  fn from(chunks: Vec<Fragment>) -> Self {
    Self { chunks }
  }
}

/// Output of [`link`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LinkResult {
  /// Function and struct definitions.
  pub definitions: String,

  /// Roots, with chunks replaced by their names.
  pub expression: String,
}

/// Link chunks.
///
/// See the [module documentation](crate::link) for what linking produces.
pub fn link(options: &LinkOptions) -> Result<LinkResult, LinkError> {
  let mut ctx = LinkContext::new();
  let expression = ctx.link_fragments(&options.chunks)?;

  debug!(
    roots = options.chunks.len(),
    definitions = ctx.linked.len(),
    "linked shader chunks"
  );

  Ok(LinkResult {
    definitions: ctx.into_definitions(),
    expression,
  })
}

/// Linking state.
///
/// A context gathers definitions as chunks get linked through it. [`link`] uses a fresh context per call; use a context
/// directly to link several expressions sharing the same definitions.
#[derive(Debug, Default)]
pub struct LinkContext {
  // Every name given so far.
  used_names: HashSet<String>,

  // Linked functions and structs. The chunk is kept so that its identity stays valid.
  linked: HashMap<ChunkId, (Chunk, String)>,

  definitions: String,

  // Names and chunks added, in order, so that a failed link can be undone.
  changes: Vec<Change>,
}

#[derive(Debug)]
enum Change {
  Name(String),
  Linked(ChunkId),
}

#[derive(Clone, Copy, Debug)]
struct Checkpoint {
  definitions: usize,
  changes: usize,
}

impl LinkContext {
  pub fn new() -> Self {
    Self::default()
  }

  /// Definitions written so far.
  pub fn definitions(&self) -> &str {
    &self.definitions
  }

  pub fn into_definitions(self) -> String {
    self.definitions
  }

  /// Link a chunk and return the text referring to it.
  ///
  /// For functions and structs, that is their name, and their definition is written the first time they are linked.
  /// For types, arrays and expressions, that is their inline text.
  ///
  /// If linking fails, the context is left as it was before the call.
  pub fn link_chunk(&mut self, chunk: &Chunk) -> Result<String, LinkError> {
    self.atomically(|ctx| ctx.resolve_chunk(chunk))
  }

  fn resolve_chunk(&mut self, chunk: &Chunk) -> Result<String, LinkError> {
    if let Some(name) = chunk.id().and_then(|id| self.linked.get(&id)).map(|(_, name)| name) {
      return Ok(name.clone());
    }

    match chunk {
      Chunk::Type(tag) => Ok(tag.wgsl_name().to_owned()),
      Chunk::Fn(fun) => self.link_fn(chunk, fun),
      Chunk::Struct(st) => self.link_struct(chunk, st),
      Chunk::Array(array) => self.link_array(array),
      Chunk::Expr(expr) => self.link_expr(expr),
      Chunk::Attribute(_) | Chunk::Foreign(_) => Err(LinkError::UnknownKind {
        kind: chunk.kind().to_owned(),
      }),
    }
  }

  /// Link fragments and concatenate them.
  ///
  /// If any fragment fails to link, the context is left as it was before the call.
  pub fn link_fragments(&mut self, fragments: &[Fragment]) -> Result<String, LinkError> {
    self.atomically(|ctx| ctx.resolve_fragments(fragments))
  }

  fn resolve_fragments(&mut self, fragments: &[Fragment]) -> Result<String, LinkError> {
    let mut output = String::new();

    for fragment in fragments {
      output.push_str(&self.resolve_fragment(fragment)?);
    }

    Ok(output)
  }

  /// Link a single fragment.
  pub fn link_fragment(&mut self, fragment: &Fragment) -> Result<String, LinkError> {
    self.atomically(|ctx| ctx.resolve_fragment(fragment))
  }

  fn resolve_fragment(&mut self, fragment: &Fragment) -> Result<String, LinkError> {
    match fragment {
      Fragment::Text(text) => Ok(text.clone()),
      Fragment::Chunk(chunk) => self.resolve_chunk(chunk),
    }
  }

  /// Render an attribute, linking the chunks among its parameters.
  pub fn render_attribute(&mut self, attr: &Attribute) -> Result<String, LinkError> {
    self.atomically(|ctx| ctx.resolve_attribute(attr))
  }

  fn resolve_attribute(&mut self, attr: &Attribute) -> Result<String, LinkError> {
    let params = if attr.params().is_empty() {
      None
    } else {
      let params = attr
        .params()
        .iter()
        .flatten()
        .map(|param| self.resolve_fragment(param))
        .collect::<Result<Vec<_>, _>>()?;
      Some(params)
    };

    let mut output = String::new();
    wgsl::write_attribute(&mut output, attr.name(), params.as_deref())?;
    Ok(output)
  }

  fn render_attributes(&mut self, attribs: &[Attribute]) -> Result<Vec<String>, LinkError> {
    attribs.iter().map(|attr| self.resolve_attribute(attr)).collect()
  }

  // Run a link step, undoing everything it added if it fails.
  fn atomically<T>(
    &mut self,
    f: impl FnOnce(&mut Self) -> Result<T, LinkError>,
  ) -> Result<T, LinkError> {
    let checkpoint = self.checkpoint();
    let result = f(self);

    if result.is_err() {
      self.rollback(checkpoint);
    }

    result
  }

  fn checkpoint(&self) -> Checkpoint {
    Checkpoint {
      definitions: self.definitions.len(),
      changes: self.changes.len(),
    }
  }

  fn rollback(&mut self, checkpoint: Checkpoint) {
    trace!(
      changes = self.changes.len() - checkpoint.changes,
      "rolling back failed link"
    );

    self.definitions.truncate(checkpoint.definitions);

    for change in self.changes.drain(checkpoint.changes..) {
      match change {
        Change::Name(name) => {
          self.used_names.remove(&name);
        }

        Change::Linked(id) => {
          self.linked.remove(&id);
        }
      }
    }
  }

  // Pick a name that hasn’t been used yet, and reserve it.
  fn create_name(&mut self, name_hint: &str) -> String {
    let hint = if name_hint.is_empty() {
      DEFAULT_NAME_HINT
    } else {
      name_hint
    };

    let mut name = hint.to_owned();
    let mut index = 1;
    while self.used_names.contains(&name) {
      name = format!("{}_{}", hint, index);
      index += 1;
    }

    if index > 1 {
      trace!(hint, %name, "name hint already in use");
    }

    self.used_names.insert(name.clone());
    self.changes.push(Change::Name(name.clone()));
    name
  }

  fn link_fn(&mut self, chunk: &Chunk, fun: &FnChunk) -> Result<String, LinkError> {
    let name = self.create_name(fun.name_hint());

    let params = fun
      .args()
      .iter()
      .map(|arg| -> Result<_, LinkError> { Ok((arg.name(), self.resolve_chunk(arg.ty())?)) })
      .collect::<Result<Vec<_>, _>>()?;
    let return_type = self.resolve_chunk(fun.return_type())?;
    let body = self.resolve_fragments(fun.body())?;
    let attribs = self.render_attributes(fun.attribs())?;

    wgsl::write_fn_def(
      &mut self.definitions,
      &FnDef {
        attribs,
        name: &name,
        params,
        return_type,
        body,
      },
    )?;

    Ok(self.finish(chunk, name, "fn"))
  }

  fn link_struct(&mut self, chunk: &Chunk, st: &StructChunk) -> Result<String, LinkError> {
    let name = self.create_name(st.name_hint());

    let fields = st
      .props()
      .iter()
      .map(|(field_name, field)| -> Result<_, LinkError> {
        let attribs = self.render_attributes(field.attribs())?;
        let ty = self.resolve_chunk(field.ty())?;

        Ok(FieldDef {
          attribs,
          name: field_name,
          ty,
        })
      })
      .collect::<Result<Vec<_>, _>>()?;

    wgsl::write_struct_def(&mut self.definitions, &StructDef { name: &name, fields })?;

    Ok(self.finish(chunk, name, "struct"))
  }

  fn link_array(&mut self, array: &ArrayChunk) -> Result<String, LinkError> {
    let elem = self.resolve_chunk(array.elem())?;

    let mut output = String::new();
    wgsl::write_array(&mut output, &elem, array.count())?;
    Ok(output)
  }

  fn link_expr(&mut self, expr: &ExprChunk) -> Result<String, LinkError> {
    self.resolve_fragments(expr.parts())
  }

  // Record a written definition.
  fn finish(&mut self, chunk: &Chunk, name: String, kind: &'static str) -> String {
    debug!(%name, kind, "emitted definition");

    if let Some(id) = chunk.id() {
      self.linked.insert(id, (chunk.clone(), name.clone()));
      self.changes.push(Change::Linked(id));
    }

    name
  }
}
