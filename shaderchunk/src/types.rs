//! Scalar and vector type tags.

use std::{fmt, str::FromStr};

macro_rules! make_type_tags {
  ($($variant:ident => $kind:literal, $wgsl:literal;)*) => {
    /// Primitive and vector types.
    ///
    /// Those types are stateless: they carry no name hint and no identity, and always render to the same WGSL type
    /// name. Linking one never emits a definition.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum TypeTag {
      $( $variant ),*
    }

    impl TypeTag {
      /// Every type tag, in declaration order.
      pub const ALL: &'static [TypeTag] = &[$( TypeTag::$variant ),*];

      /// Kind of the tag, e.g. `wgsl:vec3f`.
      pub const fn kind(self) -> &'static str {
        match self {
          $( TypeTag::$variant => $kind ),*
        }
      }

      /// WGSL spelling of the type.
      pub const fn wgsl_name(self) -> &'static str {
        match self {
          $( TypeTag::$variant => $wgsl ),*
        }
      }
    }

    impl FromStr for TypeTag {
      type Err = UnknownTypeTag;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
          $( $kind => Ok(TypeTag::$variant), )*
          _ => Err(UnknownTypeTag(s.to_owned())),
        }
      }
    }
  };
}

make_type_tags! {
  Bool => "wgsl:bool", "bool";
  F16 => "wgsl:f16", "f16";
  F32 => "wgsl:f32", "f32";
  I32 => "wgsl:i32", "i32";
  U32 => "wgsl:u32", "u32";

  Vec2f => "wgsl:vec2f", "vec2f";
  Vec2i => "wgsl:vec2i", "vec2i";
  Vec2u => "wgsl:vec2u", "vec2u";
  Vec2h => "wgsl:vec2h", "vec2h";
  Vec2b => "wgsl:vec2b", "vec2<bool>";
  Vec3f => "wgsl:vec3f", "vec3f";
  Vec3i => "wgsl:vec3i", "vec3i";
  Vec3u => "wgsl:vec3u", "vec3u";
  Vec3h => "wgsl:vec3h", "vec3h";
  Vec3b => "wgsl:vec3b", "vec3<bool>";
  Vec4f => "wgsl:vec4f", "vec4f";
  Vec4i => "wgsl:vec4i", "vec4i";
  Vec4u => "wgsl:vec4u", "vec4u";
  Vec4h => "wgsl:vec4h", "vec4h";
  Vec4b => "wgsl:vec4b", "vec4<bool>";
}

impl fmt::Display for TypeTag {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.wgsl_name())
  }
}

/// Error returned when parsing a kind that is not a scalar or vector type.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("not a scalar or vector type kind: {0}")]
pub struct UnknownTypeTag(pub String);

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn wgsl_names() {
    let names = TypeTag::ALL
      .iter()
      .map(|tag| tag.wgsl_name())
      .collect::<Vec<_>>();

    assert_eq!(
      names,
      vec![
        "bool",
        "f16",
        "f32",
        "i32",
        "u32",
        "vec2f",
        "vec2i",
        "vec2u",
        "vec2h",
        "vec2<bool>",
        "vec3f",
        "vec3i",
        "vec3u",
        "vec3h",
        "vec3<bool>",
        "vec4f",
        "vec4i",
        "vec4u",
        "vec4h",
        "vec4<bool>",
      ]
    );
  }

  #[test]
  fn parse_kind() {
    assert_eq!("wgsl:vec3b".parse(), Ok(TypeTag::Vec3b));
    assert_eq!("wgsl:f16".parse(), Ok(TypeTag::F16));
    assert_eq!(
      "wgsl:vec4".parse::<TypeTag>(),
      Err(UnknownTypeTag("wgsl:vec4".to_owned()))
    );

    for tag in TypeTag::ALL {
      assert_eq!(tag.kind().parse(), Ok(*tag));
    }
  }
}
