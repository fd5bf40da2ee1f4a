//! Builder macros for [shaderchunk](https://crates.io/crates/shaderchunk).
//!
//! You are not supposed to depend on this crate directly: use the macros re-exported by `shaderchunk` instead.

mod syntax;

use proc_macro::TokenStream;
use quote::ToTokens;
use syn::parse_macro_input;

use crate::syntax::{FnItem, StructItem};

/// Build a function chunk.
///
/// ```ignore
/// let sphere = wgsl_fn! {
///   fn sphere(p: vec3f) -> f32 {
///     "\n  return length(p) - 1.0;\n"
///   }
/// };
///
/// let scene = wgsl_fn! {
///   @must_use
///   fn (p: vec3f) -> f32 {
///     "\n  return min(" #sphere "(p), " #(planes[0]) "(p));\n"
///   }
/// };
/// ```
///
/// - The name is optional; without it, the function has an empty name hint.
/// - Argument and return types are WGSL scalar or vector type names (`f32`, `vec3f`, `vec2b`, …), or interpolated
///   chunks (`#name` or `#(expr)`).
/// - The body is a sequence of string literals and interpolated chunks. It is wrapped in braces and followed by a
///   newline.
/// - Attributes go before `fn`. Their parameters are literals, identifiers or interpolated chunks.
///
/// Interpolated expressions are borrowed, so the same chunk can be interpolated several times; it remains the same
/// chunk.
#[proc_macro]
pub fn wgsl_fn(tokens: TokenStream) -> TokenStream {
  let parsed = parse_macro_input!(tokens as FnItem);
  parsed.to_token_stream().into()
}

/// Build a struct chunk.
///
/// ```ignore
/// let vertex = wgsl_struct! {
///   struct Vertex {
///     @location(0) position: vec3f,
///     @location(1) uv: vec2f,
///     material: #material,
///   }
/// };
/// ```
#[proc_macro]
pub fn wgsl_struct(tokens: TokenStream) -> TokenStream {
  let parsed = parse_macro_input!(tokens as StructItem);
  parsed.to_token_stream().into()
}
