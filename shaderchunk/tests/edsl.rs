#![cfg(feature = "edsl")]

use shaderchunk::{link, wgsl_fn, wgsl_struct, ArrayChunk, Chunk, ExprChunk, FnChunk, LinkOptions, TypeTag};

// Union of signed distance functions, built the raw way.
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

#[test]
fn sdf_union_scene() {
  let sphere = wgsl_fn! {
    fn (p: vec3f) -> f32 {
      "\n  return length(p) - 1.0;\n"
    }
  };

  let plane = Chunk::from(
    FnChunk::new("plane", TypeTag::F32)
      .arg("p", TypeTag::Vec3f)
      .text("{\n  return p.y;\n}\n"),
  );

  let scene = sdf_union(&[sphere, plane]);
  let result = link(&LinkOptions::new().chunk(scene)).unwrap();

  let expected = r#"fn item(p: vec3f) -> f32 {
  return length(p) - 1.0;
}

fn plane(p: vec3f) -> f32 {
  return p.y;
}

fn sdfUnion(p: vec3f) -> f32 {
  var d = f32(1e38);
  d = min(d, item(p));
  d = min(d, plane(p));
  return d;
}

"#;

  assert_eq!(result.definitions, expected);
  assert_eq!(result.expression, "sdfUnion");
}

#[test]
fn interpolation_shares_chunks() {
  let sphere = wgsl_fn! {
    fn sphere(p: vec3f) -> f32 {
      "return length(p) - 1.0;"
    }
  };

  let twice = wgsl_fn! {
    fn twice(p: vec3f) -> f32 {
      "return " #sphere "(p) + " #(sphere.clone()) "(p * 2.0);"
    }
  };

  let result = link(&LinkOptions::new().chunk(twice).text("; ").chunk(sphere)).unwrap();

  assert_eq!(
    result.definitions,
    "fn sphere(p: vec3f) -> f32 {return length(p) - 1.0;}\n\n\
     fn twice(p: vec3f) -> f32 {return sphere(p) + sphere(p * 2.0);}\n\n"
  );
  assert_eq!(result.expression, "twice; sphere");
}

#[test]
fn struct_and_attributes() {
  let light = wgsl_struct! {
    struct Light {
      @location(0) position: vec3f,
      intensity: f32,
    }
  };
  let lights = Chunk::from(ArrayChunk::new(light.clone(), 4));

  let brightest = wgsl_fn! {
    @must_use
    fn brightest(lights: #lights) -> #light {
      "\n  return lights[0];\n"
    }
  };

  let result = link(&LinkOptions::new().chunk(brightest)).unwrap();

  let expected = r#"struct Light {
  @location(0) position: vec3f;
  intensity: f32;
};

@must_use
fn brightest(lights: array<Light, 4>) -> Light {
  return lights[0];
}

"#;

  assert_eq!(result.definitions, expected);
}

#[test]
fn interpolated_attribute_params() {
  let size = Chunk::from(ExprChunk::new(TypeTag::U32).text("64"));

  let main = wgsl_fn! {
    @compute @workgroup_size(#size, 1, "1")
    fn main(index: u32) -> u32 {
      " return index; "
    }
  };

  let result = link(&LinkOptions::new().chunk(main)).unwrap();

  assert_eq!(
    result.definitions,
    "@compute @workgroup_size(64, 1, 1)\nfn main(index: u32) -> u32 { return index; }\n\n"
  );
}

#[test]
fn macro_matches_builder() {
  let from_macro = wgsl_fn! {
    fn add(a: i32, b: i32) -> i32 {
      "return a + b;"
    }
  };

  let from_builder = Chunk::from(
    FnChunk::new("add", TypeTag::I32)
      .arg("a", TypeTag::I32)
      .arg("b", TypeTag::I32)
      .text("{return a + b;}\n"),
  );

  assert_eq!(
    link(&LinkOptions::new().chunk(from_macro)).unwrap(),
    link(&LinkOptions::new().chunk(from_builder)).unwrap()
  );
}

#[test]
fn anonymous_struct() {
  let st = wgsl_struct! {
    struct {
      x: f32,
    }
  };

  let result = link(&LinkOptions::new().chunk(st)).unwrap();

  assert_eq!(result.definitions, "struct item {\n  x: f32;\n};\n\n");
  assert_eq!(result.expression, "item");
}

#[test]
fn negative_attribute_params() {
  let f = wgsl_fn! {
    @offset(-4, -0.5)
    fn f() -> f32 {
      "return 1.0;"
    }
  };

  let result = link(&LinkOptions::new().chunk(f)).unwrap();

  assert_eq!(
    result.definitions,
    "@offset(-4, -0.5)\nfn f() -> f32 {return 1.0;}\n\n"
  );
}
