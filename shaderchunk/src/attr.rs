//! Attributes.

use crate::chunk::Fragment;

/// Attribute, such as `@compute` or `@location(0)`.
///
/// Parameters are grouped; groups only exist for the convenience of whoever builds the attribute. When written, all
/// groups are flattened into a single comma-separated list.
///
/// # Examples
///
/// ```
/// use shaderchunk::Attribute;
///
/// // @workgroup_size(64, 1, 1)
/// let attr = Attribute::new("workgroup_size").group(["64"]).group(["1", "1"]);
/// ```
#[derive(Clone, Debug)]
pub struct Attribute {
  name: String,
  params: Vec<Vec<Fragment>>,
}

impl Attribute {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      params: Vec::new(),
    }
  }

  /// Append a group of parameters.
  pub fn group<I>(mut self, params: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<Fragment>,
  {
    self.params.push(params.into_iter().map(Into::into).collect());
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn params(&self) -> &[Vec<Fragment>] {
    &self.params
  }
}
