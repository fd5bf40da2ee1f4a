use std::fmt;

/// Errors that can happen while linking.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
  /// A chunk that cannot be linked was reached.
  ///
  /// This is the case for chunks of a foreign kind, and for attributes used anywhere else than on a function or a
  /// struct field.
  #[error("unknown kind of shader chunk: {kind}")]
  UnknownKind { kind: String },

  /// The writer failed.
  #[error(transparent)]
  Write(#[from] fmt::Error),
}
