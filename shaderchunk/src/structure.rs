//! Struct chunks.

use crate::{attr::Attribute, chunk::Chunk};

/// Struct definition.
///
/// Fields are kept in declaration order, which is also the order in which they are written. Declaring a field twice
/// replaces the first declaration but keeps its position.
#[derive(Clone, Debug)]
pub struct StructChunk {
  name_hint: String,
  props: Vec<(String, StructField)>,
}

impl StructChunk {
  pub fn new(name_hint: impl Into<String>) -> Self {
    Self {
      name_hint: name_hint.into(),
      props: Vec::new(),
    }
  }

  /// Declare a field without attributes.
  pub fn field(self, name: impl Into<String>, ty: impl Into<Chunk>) -> Self {
    self.prop(name, StructField::new(ty))
  }

  /// Declare a field.
  pub fn prop(mut self, name: impl Into<String>, field: StructField) -> Self {
    let name = name.into();

    match self.props.iter_mut().find(|(key, _)| *key == name) {
      Some((_, existing)) => *existing = field,
      None => self.props.push((name, field)),
    }

    self
  }

  pub fn name_hint(&self) -> &str {
    &self.name_hint
  }

  pub fn props(&self) -> &[(String, StructField)] {
    &self.props
  }

  pub fn get(&self, name: &str) -> Option<&StructField> {
    self
      .props
      .iter()
      .find_map(|(key, field)| if key == name { Some(field) } else { None })
  }
}

/// Struct field: a type and its attributes.
#[derive(Clone, Debug)]
pub struct StructField {
  ty: Chunk,
  attribs: Vec<Attribute>,
}

impl StructField {
  pub fn new(ty: impl Into<Chunk>) -> Self {
    Self {
      ty: ty.into(),
      attribs: Vec::new(),
    }
  }

  pub fn attr(mut self, attr: Attribute) -> Self {
    self.attribs.push(attr);
    self
  }

  pub fn ty(&self) -> &Chunk {
    &self.ty
  }

  pub fn attribs(&self) -> &[Attribute] {
    &self.attribs
  }
}
