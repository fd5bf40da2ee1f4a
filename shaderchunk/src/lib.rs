//! Shader chunks: composable pieces of WGSL, and the linker putting them together.
//!
//! WGSL has no module system. Sharing code between shaders usually means concatenating strings and hoping that no two
//! pieces define the same name, or that a helper used by two pieces isn’t defined twice. This crate takes another road:
//! pieces of shader code are plain Rust values — [`Chunk`]s — that you build, store and pass around like any other
//! value, and a final [linking](crate::link) step turns a set of chunks into actual WGSL source.
//!
//! # Chunks
//!
//! A chunk is one of:
//!
//! - A scalar or vector type, such as `f32` or `vec3f` ([`TypeTag`]).
//! - A function ([`FnChunk`]), with arguments, a return type and a body. The body is literal WGSL text in which other
//!   chunks can be referenced.
//! - A struct ([`StructChunk`]).
//! - A fixed-size array type ([`ArrayChunk`]).
//! - A pre-built typed expression ([`ExprChunk`]).
//! - An attribute ([`Attribute`]), attached to functions and struct fields.
//!
//! Chunks are immutable. Cloning a chunk doesn’t copy it: the clone is the same chunk, and the linker will only ever
//! define it once. On the other hand, two chunks built separately are different, even if they are equal field by
//! field; each gets its own definition.
//!
//! # Linking
//!
//! [`link`] takes an ordered list of roots — chunks and literal text — and returns a [`LinkResult`]:
//!
//! - `definitions`, every function and struct reachable from the roots, written once each, dependencies first.
//! - `expression`, the roots with every chunk replaced by the name it was given.
//!
//! Names come from the chunks’ name hints. When two chunks want the same name, the second gets a numeric suffix
//! (`sphere`, `sphere_1`, …). Chunks without a hint are named `item`.
//!
//! ```
//! use shaderchunk::{link, Chunk, FnChunk, LinkOptions, TypeTag};
//!
//! let sphere = Chunk::from(
//!   FnChunk::new("sphere", TypeTag::F32)
//!     .arg("p", TypeTag::Vec3f)
//!     .text("{\n  return length(p) - 1.0;\n}"),
//! );
//!
//! let scene = Chunk::from(
//!   FnChunk::new("scene", TypeTag::F32)
//!     .arg("p", TypeTag::Vec3f)
//!     .text("{\n  return min(")
//!     .chunk(sphere.clone())
//!     .text("(p), ")
//!     .chunk(sphere)
//!     .text("(p - vec3f(2.0)));\n}"),
//! );
//!
//! let result = link(&LinkOptions::new().chunk(scene)).unwrap();
//!
//! assert_eq!(result.expression, "scene");
//! assert_eq!(
//!   result.definitions,
//!   r#"fn sphere(p: vec3f) -> f32 {
//!   return length(p) - 1.0;
//! }
//! fn scene(p: vec3f) -> f32 {
//!   return min(sphere(p), sphere(p - vec3f(2.0)));
//! }
//! "#
//! );
//! ```
//!
//! # The builder macros
//!
//! With the `edsl` feature (enabled by default), the [`wgsl_fn!`] and [`wgsl_struct!`] macros let you write chunks with a
//! syntax close to WGSL, interpolating other chunks with `#name` or `#(expr)`:
//!
//! ```
//! # #[cfg(feature = "edsl")] {
//! use shaderchunk::{link, wgsl_fn, LinkOptions};
//!
//! let sphere = wgsl_fn! {
//!   fn sphere(p: vec3f) -> f32 {
//!     "return length(p) - 1.0;"
//!   }
//! };
//!
//! let scene = wgsl_fn! {
//!   fn scene(p: vec3f) -> f32 {
//!     "return " #sphere "(p);"
//!   }
//! };
//!
//! let result = link(&LinkOptions::new().chunk(scene)).unwrap();
//! assert_eq!(result.expression, "scene");
//! # }
//! ```

pub mod array;
pub mod attr;
pub mod chunk;
pub mod error;
pub mod expr;
pub mod fun;
pub mod link;
pub mod structure;
pub mod types;
pub mod writer;

pub use crate::{
  array::ArrayChunk,
  attr::Attribute,
  chunk::{AsChunk, Chunk, ChunkId, Fragment},
  error::LinkError,
  expr::ExprChunk,
  fun::{FnArg, FnChunk},
  link::{link, LinkContext, LinkOptions, LinkResult, DEFAULT_NAME_HINT},
  structure::{StructChunk, StructField},
  types::{TypeTag, UnknownTypeTag},
};

#[cfg(feature = "edsl")]
pub use shaderchunk_edsl::{wgsl_fn, wgsl_struct};
