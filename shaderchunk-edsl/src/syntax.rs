use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{
  braced,
  ext::IdentExt as _,
  parenthesized,
  parse::{Parse, ParseStream},
  parse_quote,
  punctuated::Punctuated,
  token::{Brace, Paren},
  Expr, Ident, Lit, LitStr, Token,
};

/// WGSL scalar and vector types that can be written without interpolation.
const TYPE_TAGS: &[&str] = &[
  "bool", "f16", "f32", "i32", "u32", "vec2f", "vec2i", "vec2u", "vec2h", "vec2b", "vec3f", "vec3i", "vec3u", "vec3h",
  "vec3b", "vec4f", "vec4i", "vec4u", "vec4h", "vec4b",
];

/// A function chunk.
///
/// ```ignore
/// @attr(…)* fn name?(arg: type, …) -> type { "text" #chunk … }
/// ```
#[derive(Debug)]
pub struct FnItem {
  attribs: Vec<AttrItem>,
  fn_token: Token![fn],
  name: Option<Ident>,
  paren_token: Paren,
  args: Punctuated<ArgItem, Token![,]>,
  arrow_token: Token![->],
  ret: TypeItem,
  body: BodyItem,
}

impl Parse for FnItem {
  fn parse(input: ParseStream) -> Result<Self, syn::Error> {
    let attribs = AttrItem::parse_many(input)?;
    let fn_token = input.parse()?;
    let name = if input.peek(Paren) {
      None
    } else {
      Some(Ident::parse_any(input)?)
    };
    let args_input;
    let paren_token = parenthesized!(args_input in input);
    let args = args_input.parse_terminated(ArgItem::parse)?;
    let arrow_token = input.parse()?;
    let ret = input.parse()?;
    let body = input.parse()?;

    Ok(Self {
      attribs,
      fn_token,
      name,
      paren_token,
      args,
      arrow_token,
      ret,
      body,
    })
  }
}

impl ToTokens for FnItem {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let name = self.name.as_ref().map(Ident::to_string).unwrap_or_default();
    let ret = &self.ret;
    let attribs = &self.attribs;
    let arg_names = self.args.iter().map(|arg| arg.name.to_string());
    let arg_tys = self.args.iter().map(|arg| &arg.ty);
    let pieces = &self.body.pieces;

    let q = quote! {
      ::shaderchunk::Chunk::from(
        ::shaderchunk::FnChunk::new(#name, #ret)
          #( .attr(#attribs) )*
          #( .arg(#arg_names, #arg_tys) )*
          .text("{")
          #( .fragment(#pieces) )*
          .text("}\n")
      )
    };

    q.to_tokens(tokens);
  }
}

#[derive(Debug)]
pub struct ArgItem {
  name: Ident,
  colon_token: Token![:],
  ty: TypeItem,
}

impl Parse for ArgItem {
  fn parse(input: ParseStream) -> Result<Self, syn::Error> {
    let name = Ident::parse_any(input)?;
    let colon_token = input.parse()?;
    let ty = input.parse()?;

    Ok(Self {
      name,
      colon_token,
      ty,
    })
  }
}

/// A struct chunk.
///
/// ```ignore
/// struct Name? { @attr(…)* field: type, … }
/// ```
#[derive(Debug)]
pub struct StructItem {
  struct_token: Token![struct],
  name: Option<Ident>,
  brace_token: Brace,
  fields: Punctuated<FieldItem, Token![,]>,
}

impl Parse for StructItem {
  fn parse(input: ParseStream) -> Result<Self, syn::Error> {
    let struct_token = input.parse()?;
    let name = if input.peek(Brace) {
      None
    } else {
      Some(Ident::parse_any(input)?)
    };
    let fields_input;
    let brace_token = braced!(fields_input in input);
    let fields = fields_input.parse_terminated(FieldItem::parse)?;

    Ok(Self {
      struct_token,
      name,
      brace_token,
      fields,
    })
  }
}

impl ToTokens for StructItem {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let name = self.name.as_ref().map(Ident::to_string).unwrap_or_default();
    let fields = self.fields.iter();

    let q = quote! {
      ::shaderchunk::Chunk::from(
        ::shaderchunk::StructChunk::new(#name)
          #( #fields )*
      )
    };

    q.to_tokens(tokens);
  }
}

#[derive(Debug)]
pub struct FieldItem {
  attribs: Vec<AttrItem>,
  name: Ident,
  colon_token: Token![:],
  ty: TypeItem,
}

impl Parse for FieldItem {
  fn parse(input: ParseStream) -> Result<Self, syn::Error> {
    let attribs = AttrItem::parse_many(input)?;
    let name = Ident::parse_any(input)?;
    let colon_token = input.parse()?;
    let ty = input.parse()?;

    Ok(Self {
      attribs,
      name,
      colon_token,
      ty,
    })
  }
}

// A field is written as a method call on the struct being built.
impl ToTokens for FieldItem {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let name = self.name.to_string();
    let ty = &self.ty;
    let attribs = &self.attribs;

    let q = quote! {
      .prop(#name, ::shaderchunk::StructField::new(#ty) #( .attr(#attribs) )*)
    };

    q.to_tokens(tokens);
  }
}

/// A type: either a WGSL scalar / vector type name, or an interpolated chunk.
#[derive(Debug)]
pub enum TypeItem {
  Tag(Ident),
  Interp(InterpItem),
}

impl Parse for TypeItem {
  fn parse(input: ParseStream) -> Result<Self, syn::Error> {
    if input.peek(Token![#]) {
      return Ok(TypeItem::Interp(input.parse()?));
    }

    let ident = Ident::parse_any(input)?;
    let name = ident.to_string();

    if !TYPE_TAGS.contains(&name.as_str()) {
      return Err(syn::Error::new(
        ident.span(),
        format!(
          "unknown WGSL type `{}`; use `#name` or `#(expr)` to interpolate a chunk",
          name
        ),
      ));
    }

    // vec3f -> Vec3f, bool -> Bool
    let mut variant = name[..1].to_uppercase();
    variant.push_str(&name[1..]);

    Ok(TypeItem::Tag(Ident::new(&variant, ident.span())))
  }
}

impl ToTokens for TypeItem {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let q = match self {
      TypeItem::Tag(variant) => quote! { ::shaderchunk::Chunk::Type(::shaderchunk::TypeTag::#variant) },
      TypeItem::Interp(interp) => quote! { #interp },
    };

    q.to_tokens(tokens);
  }
}

/// A chunk interpolation: `#name` or `#(expr)`.
#[derive(Debug)]
pub struct InterpItem {
  pound_token: Token![#],
  expr: Expr,
}

impl Parse for InterpItem {
  fn parse(input: ParseStream) -> Result<Self, syn::Error> {
    let pound_token = input.parse()?;

    let expr = if input.peek(Paren) {
      let expr_input;
      parenthesized!(expr_input in input);
      expr_input.parse()?
    } else {
      let ident: Ident = input.parse()?;
      parse_quote! { #ident }
    };

    Ok(Self { pound_token, expr })
  }
}

impl ToTokens for InterpItem {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let expr = &self.expr;
    let q = quote! { ::shaderchunk::AsChunk::to_chunk(&(#expr)) };

    q.to_tokens(tokens);
  }
}

/// Function body: string literals and interpolations.
#[derive(Debug)]
pub struct BodyItem {
  brace_token: Brace,
  pieces: Vec<PieceItem>,
}

impl Parse for BodyItem {
  fn parse(input: ParseStream) -> Result<Self, syn::Error> {
    let body_input;
    let brace_token = braced!(body_input in input);
    let mut pieces = Vec::new();

    while !body_input.is_empty() {
      pieces.push(body_input.parse()?);
    }

    Ok(Self {
      brace_token,
      pieces,
    })
  }
}

#[derive(Debug)]
pub enum PieceItem {
  Text(LitStr),
  Interp(InterpItem),
}

impl Parse for PieceItem {
  fn parse(input: ParseStream) -> Result<Self, syn::Error> {
    let lookahead = input.lookahead1();

    if lookahead.peek(LitStr) {
      Ok(PieceItem::Text(input.parse()?))
    } else if lookahead.peek(Token![#]) {
      Ok(PieceItem::Interp(input.parse()?))
    } else {
      Err(lookahead.error())
    }
  }
}

// Pieces are fragments.
impl ToTokens for PieceItem {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let q = match self {
      PieceItem::Text(lit) => quote! { ::shaderchunk::Fragment::Text(::std::string::String::from(#lit)) },
      PieceItem::Interp(interp) => quote! { ::shaderchunk::Fragment::Chunk(#interp) },
    };

    q.to_tokens(tokens);
  }
}

/// An attribute: `@name` or `@name(param, …)`.
///
/// Each attribute written with parentheses has a single group of parameters.
#[derive(Debug)]
pub struct AttrItem {
  at_token: Token![@],
  name: Ident,
  params: Option<Punctuated<AttrParamItem, Token![,]>>,
}

impl AttrItem {
  fn parse_many(input: ParseStream) -> Result<Vec<Self>, syn::Error> {
    let mut attribs = Vec::new();

    while input.peek(Token![@]) {
      attribs.push(input.parse()?);
    }

    Ok(attribs)
  }
}

impl Parse for AttrItem {
  fn parse(input: ParseStream) -> Result<Self, syn::Error> {
    let at_token = input.parse()?;
    let name = Ident::parse_any(input)?;

    let params = if input.peek(Paren) {
      let params_input;
      parenthesized!(params_input in input);
      Some(params_input.parse_terminated(AttrParamItem::parse)?)
    } else {
      None
    };

    Ok(Self {
      at_token,
      name,
      params,
    })
  }
}

impl ToTokens for AttrItem {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let name = self.name.to_string();

    let q = match &self.params {
      None => quote! { ::shaderchunk::Attribute::new(#name) },
      Some(params) => {
        let params = params.iter();
        quote! {
          ::shaderchunk::Attribute::new(#name).group({
            let params: ::std::vec::Vec<::shaderchunk::Fragment> = ::std::vec![#( #params ),*];
            params
          })
        }
      }
    };

    q.to_tokens(tokens);
  }
}

/// An attribute parameter, copied as text unless interpolated.
///
/// Numeric literals may be negated, e.g. `@align(-4)`.
#[derive(Debug)]
pub enum AttrParamItem {
  Text(String),
  Interp(InterpItem),
}

impl Parse for AttrParamItem {
  fn parse(input: ParseStream) -> Result<Self, syn::Error> {
    if input.peek(Token![#]) {
      return Ok(AttrParamItem::Interp(input.parse()?));
    }

    if input.peek(Lit) {
      let text = match input.parse()? {
        Lit::Str(lit) => lit.value(),
        lit => lit.to_token_stream().to_string(),
      };

      return Ok(AttrParamItem::Text(text));
    }

    if input.peek(Token![-]) {
      let minus_token: Token![-] = input.parse()?;

      let text = match input.parse::<Lit>() {
        Ok(Lit::Int(lit)) => lit.to_string(),
        Ok(Lit::Float(lit)) => lit.to_string(),
        _ => {
          return Err(syn::Error::new_spanned(
            minus_token,
            "only numbers can be negated; use `#(expr)` to interpolate anything else",
          ))
        }
      };

      return Ok(AttrParamItem::Text(format!("-{}", text)));
    }

    let ident = Ident::parse_any(input)?;
    Ok(AttrParamItem::Text(ident.to_string()))
  }
}

impl ToTokens for AttrParamItem {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let q = match self {
      AttrParamItem::Text(text) => quote! { ::shaderchunk::Fragment::Text(::std::string::String::from(#text)) },
      AttrParamItem::Interp(interp) => quote! { ::shaderchunk::Fragment::Chunk(#interp) },
    };

    q.to_tokens(tokens);
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn tokens(item: impl ToTokens) -> String {
    item.to_token_stream().to_string()
  }

  #[test]
  fn fn_item() {
    let item: FnItem = syn::parse_str(r#"fn add(a: f32, b: vec2b) -> f32 { "return a;" }"#).unwrap();

    assert_eq!(item.name.as_ref().map(Ident::to_string), Some("add".to_owned()));
    assert_eq!(item.args.len(), 2);
    assert_eq!(item.body.pieces.len(), 1);

    let output = tokens(&item);
    assert!(output.contains("FnChunk :: new (\"add\""));
    assert!(output.contains("TypeTag :: Vec2b"));
    assert!(output.contains("TypeTag :: F32"));
  }

  #[test]
  fn anonymous_fn_item() {
    let item: FnItem = syn::parse_str(r#"fn (p: vec3f) -> f32 { "return " #other "(p);" }"#).unwrap();

    assert!(item.name.is_none());
    assert_eq!(item.body.pieces.len(), 3);
    assert!(tokens(&item).contains("FnChunk :: new (\"\""));
  }

  #[test]
  fn interpolated_types() {
    let item: FnItem = syn::parse_str(r#"fn f(v: #(vertices.clone())) -> #vertex { "" }"#).unwrap();

    assert!(matches!(item.ret, TypeItem::Interp(_)));
    let output = tokens(&item);
    assert!(output.contains("AsChunk :: to_chunk"));
    assert!(output.contains("vertices . clone ()"));
  }

  #[test]
  fn unknown_type() {
    let err = syn::parse_str::<FnItem>(r#"fn f(v: vec5f) -> f32 { "" }"#).unwrap_err();
    assert!(err.to_string().contains("unknown WGSL type `vec5f`"));
  }

  #[test]
  fn body_rejects_tokens() {
    assert!(syn::parse_str::<FnItem>(r#"fn f() -> f32 { return 1.0; }"#).is_err());
  }

  #[test]
  fn attributes() {
    let item: FnItem =
      syn::parse_str(r#"@compute @workgroup_size(64, y, "1") @const fn main() -> u32 { "" }"#).unwrap();

    assert_eq!(item.attribs.len(), 3);
    assert_eq!(item.attribs[0].name.to_string(), "compute");
    assert!(item.attribs[0].params.is_none());

    let params = item.attribs[1]
      .params
      .iter()
      .flatten()
      .map(|param| match param {
        AttrParamItem::Text(text) => text.clone(),
        AttrParamItem::Interp(_) => panic!("unexpected interpolation"),
      })
      .collect::<Vec<_>>();
    assert_eq!(params, vec!["64", "y", "1"]);

    assert_eq!(item.attribs[2].name.to_string(), "const");
  }

  #[test]
  fn struct_item() {
    let item: StructItem =
      syn::parse_str(r#"struct Vertex { @location(0) position: vec3f, @builtin(position) clip: vec4f, lights: #lights }"#)
        .unwrap();

    assert_eq!(item.name.as_ref().map(Ident::to_string), Some("Vertex".to_owned()));
    assert_eq!(item.fields.len(), 3);

    match &item.fields[1].attribs[0].params {
      Some(params) => assert!(matches!(params.first(), Some(AttrParamItem::Text(text)) if text == "position")),
      None => panic!("missing attribute parameters"),
    }

    let output = tokens(&item);
    assert!(output.contains("StructChunk :: new (\"Vertex\")"));
    assert!(output.contains(". prop (\"lights\""));
  }

  #[test]
  fn anonymous_struct_item() {
    let item: StructItem = syn::parse_str(r#"struct { x: f32 }"#).unwrap();

    assert!(item.name.is_none());
    assert_eq!(item.fields.len(), 1);
    assert!(tokens(&item).contains("StructChunk :: new (\"\")"));
  }

  #[test]
  fn negative_attribute_params() {
    let item: FnItem = syn::parse_str(r#"@offset(-4, -0.5, 2) fn f() -> f32 { "" }"#).unwrap();

    let params = item.attribs[0]
      .params
      .iter()
      .flatten()
      .map(|param| match param {
        AttrParamItem::Text(text) => text.clone(),
        AttrParamItem::Interp(_) => panic!("unexpected interpolation"),
      })
      .collect::<Vec<_>>();
    assert_eq!(params, vec!["-4", "-0.5", "2"]);
  }

  #[test]
  fn only_numbers_are_negated() {
    let err = syn::parse_str::<FnItem>(r#"@offset(-x) fn f() -> f32 { "" }"#).unwrap_err();
    assert!(err.to_string().contains("only numbers can be negated"));
  }
}
