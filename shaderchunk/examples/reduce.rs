//! A (pretend) reduce shader, parameterized by chunks.

use std::sync::Arc;

use shaderchunk::{link, wgsl_fn, Chunk, ExprChunk, FnChunk, LinkError, LinkOptions, TypeTag};

struct ReduceShaderOptions {
  /// Value elements start from.
  natural: Chunk,

  /// Applied to every element before reducing.
  premap_fn: Option<Chunk>,

  /// Combines two elements.
  reduce_fn: Arc<FnChunk>,
}

struct ReduceShader {
  compute_shader: String,
}

impl ReduceShader {
  fn new(options: ReduceShaderOptions) -> Result<Self, LinkError> {
    let ReduceShaderOptions {
      natural,
      premap_fn,
      reduce_fn,
    } = options;

    let premap = |fun: FnChunk, arg: &str| match &premap_fn {
      Some(premap_fn) => fun.chunk(premap_fn.clone()).text(format!("({})", arg)),
      None => fun.text(arg.to_owned()),
    };

    let fun = FnChunk::new("reduce", reduce_fn.return_type().clone())
      .text("{\n")
      .text("  let a = ")
      .chunk(natural.clone())
      .text(";\n")
      .text("  let b = ")
      .chunk(natural)
      .text(";\n")
      .text("  return ")
      .chunk(reduce_fn)
      .text("(");
    let fun = premap(fun, "a").text(", ");
    let fun = premap(fun, "b").text(");\n").text("}\n");

    let compute_shader = link(&LinkOptions::new().chunk(fun))?.definitions;

    Ok(Self { compute_shader })
  }
}

fn main() -> Result<(), LinkError> {
  tracing_subscriber::fmt::init();

  let natural = Chunk::from(ExprChunk::new(TypeTag::U32).text("0u"));

  let premap_fn = wgsl_fn! {
    fn double(x: u32) -> u32 {
      "\n  return x * 2u;\n"
    }
  };

  let reduce_fn = Arc::new(
    FnChunk::new("add", TypeTag::U32)
      .arg("a", TypeTag::U32)
      .arg("b", TypeTag::U32)
      .text("{\n  return a + b;\n}\n"),
  );

  let shader = ReduceShader::new(ReduceShaderOptions {
    natural,
    premap_fn: Some(premap_fn),
    reduce_fn,
  })?;

  println!("{}", shader.compute_shader);

  Ok(())
}
