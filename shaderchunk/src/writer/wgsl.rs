//! WGSL writer.
//!
//! The writer only composes text. Everything it receives is already linked: names are final and nested chunks have
//! been replaced by their names or inline text.

use std::fmt;

// Indentation of struct fields.
const INDENT: &str = "  ";

/// A linked function definition.
#[derive(Clone, Debug)]
pub struct FnDef<'a> {
  pub attribs: Vec<String>,
  pub name: &'a str,
  pub params: Vec<(&'a str, String)>,
  pub return_type: String,
  pub body: String,
}

/// A linked struct definition.
#[derive(Clone, Debug)]
pub struct StructDef<'a> {
  pub name: &'a str,
  pub fields: Vec<FieldDef<'a>>,
}

/// A linked struct field.
#[derive(Clone, Debug)]
pub struct FieldDef<'a> {
  pub attribs: Vec<String>,
  pub name: &'a str,
  pub ty: String,
}

/// Write a function definition, followed by a newline.
pub fn write_fn_def(f: &mut impl fmt::Write, def: &FnDef) -> fmt::Result {
  write_attributes(f, &def.attribs, "\n")?;

  write!(f, "fn {}(", def.name)?;
  for (i, (arg, ty)) in def.params.iter().enumerate() {
    if i > 0 {
      f.write_str(", ")?;
    }

    write!(f, "{}: {}", arg, ty)?;
  }

  writeln!(f, ") -> {} {}", def.return_type, def.body)
}

/// Write a struct definition, followed by an empty line.
pub fn write_struct_def(f: &mut impl fmt::Write, def: &StructDef) -> fmt::Result {
  writeln!(f, "struct {} {{", def.name)?;

  for (i, field) in def.fields.iter().enumerate() {
    if i > 0 {
      f.write_str("\n")?;
    }

    f.write_str(INDENT)?;
    write_attributes(f, &field.attribs, " ")?;
    write!(f, "{}: {};", field.name, field.ty)?;
  }

  f.write_str("\n};\n\n")
}

/// Write an inline array type.
pub fn write_array(f: &mut impl fmt::Write, elem: &str, count: usize) -> fmt::Result {
  write!(f, "array<{}, {}>", elem, count)
}

/// Write a single attribute.
///
/// `params` is `None` for a bare attribute (`@name`); otherwise every parameter is written in a single list, even if
/// empty (`@name()`).
pub fn write_attribute(f: &mut impl fmt::Write, name: &str, params: Option<&[String]>) -> fmt::Result {
  write!(f, "@{}", name)?;

  if let Some(params) = params {
    write!(f, "({})", params.join(", "))?;
  }

  Ok(())
}

// Space-separated attributes, followed by sep; nothing at all if there is none.
fn write_attributes(f: &mut impl fmt::Write, attribs: &[String], sep: &str) -> fmt::Result {
  if attribs.is_empty() {
    return Ok(());
  }

  f.write_str(&attribs.join(" "))?;
  f.write_str(sep)
}

#[cfg(test)]
mod test {
  use super::*;

  fn to_str(w: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut output = String::new();
    w(&mut output).unwrap();
    output
  }

  #[test]
  fn fn_def() {
    let def = FnDef {
      attribs: vec!["@compute".to_owned(), "@workgroup_size(64)".to_owned()],
      name: "main",
      params: vec![("a", "f32".to_owned()), ("b", "vec2<bool>".to_owned())],
      return_type: "f32".to_owned(),
      body: "{ return a; }".to_owned(),
    };

    assert_eq!(
      to_str(|f| write_fn_def(f, &def)),
      "@compute @workgroup_size(64)\nfn main(a: f32, b: vec2<bool>) -> f32 { return a; }\n"
    );
  }

  #[test]
  fn fn_def_without_args() {
    let def = FnDef {
      attribs: Vec::new(),
      name: "item",
      params: Vec::new(),
      return_type: "u32".to_owned(),
      body: "{ return 0u; }".to_owned(),
    };

    assert_eq!(
      to_str(|f| write_fn_def(f, &def)),
      "fn item() -> u32 { return 0u; }\n"
    );
  }

  #[test]
  fn struct_def() {
    let def = StructDef {
      name: "Vertex",
      fields: vec![
        FieldDef {
          attribs: vec!["@location(0)".to_owned()],
          name: "position",
          ty: "vec3f".to_owned(),
        },
        FieldDef {
          attribs: Vec::new(),
          name: "uv",
          ty: "vec2f".to_owned(),
        },
      ],
    };

    assert_eq!(
      to_str(|f| write_struct_def(f, &def)),
      "struct Vertex {\n  @location(0) position: vec3f;\n  uv: vec2f;\n};\n\n"
    );
  }

  #[test]
  fn attribute() {
    assert_eq!(to_str(|f| write_attribute(f, "vertex", None)), "@vertex");
    assert_eq!(to_str(|f| write_attribute(f, "size", Some(&[]))), "@size()");
    assert_eq!(
      to_str(|f| write_attribute(f, "name", Some(&["p1".to_owned(), "p2".to_owned()]))),
      "@name(p1, p2)"
    );
  }

  #[test]
  fn array() {
    assert_eq!(to_str(|f| write_array(f, "Vertex", 100)), "array<Vertex, 100>");
  }
}
