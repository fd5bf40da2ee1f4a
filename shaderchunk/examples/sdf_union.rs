//! A scene made of signed distance functions.
//!
//! `sdf_union` plays the part of a library: it knows nothing about the objects it’s given, it just takes chunks and
//! returns a new chunk using them.

use shaderchunk::{link, wgsl_fn, Chunk, FnChunk, LinkError, LinkOptions, TypeTag};

/// Union of signed distance functions of `p: vec3f`.
fn sdf_union(objects: &[Chunk]) -> Chunk {
  let fun = FnChunk::new("sdfUnion", TypeTag::F32)
    .arg("p", TypeTag::Vec3f)
    .text("{\n")
    .text("  var d = f32(1e38);\n");

  objects
    .iter()
    .fold(fun, |fun, obj| fun.text("  d = min(d, ").chunk(obj.clone()).text("(p));\n"))
    .text("  return d;\n")
    .text("}\n")
    .into()
}

fn main() -> Result<(), LinkError> {
  tracing_subscriber::fmt::init();

  // with the builder macro
  let sphere = wgsl_fn! {
    fn (p: vec3f) -> f32 {
      "\n  return length(p) - 1.0;\n"
    }
  };

  // or by hand
  let plane = Chunk::from(
    FnChunk::new("plane", TypeTag::F32)
      .arg("p", TypeTag::Vec3f)
      .text("{\n  return p.y;\n}\n"),
  );

  let scene = sdf_union(&[sphere, plane]);

  let result = link(&LinkOptions::new().chunk(scene))?;
  println!("{}", result.definitions);

  Ok(())
}
