//! Parsing of `#[bean(...)]` attributes.

use convert_case::{Boundary, Case, Casing};
use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, ExprLit, ExprUnary, Ident, Lit, LitStr, Path, Token, Type, UnOp};

use crate::BEAN_ATTRIBUTE_NAME;

fn duplicate(meta: &ParseNestedMeta, name: &str) -> syn::Error {
    meta.error(format!("duplicate `{name}` attribute"))
}

/// Runs `parse` on every `#[bean(...)]` entry of `attrs`.
fn for_each_bean_meta(
    attrs: &[Attribute],
    mut parse: impl FnMut(ParseNestedMeta) -> syn::Result<()>,
) -> syn::Result<()> {
    for attr in attrs {
        if attr.path().is_ident(BEAN_ATTRIBUTE_NAME) {
            attr.parse_nested_meta(&mut parse)?;
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Type-level attributes of `#[derive(Bean)]`.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `skip = [a, b]`
    pub skip: Vec<Ident>,
    /// `rename_all = "camelCase"`
    pub rename_all: Option<Case>,
    /// `accessors`
    pub accessors: Option<Span>,
    /// `partial_eq`
    pub partial_eq: Option<Span>,
    /// `auto_register`
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for_each_bean_meta(attrs, |meta| this.parse_meta(meta))?;
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("skip") {
            let value = meta.value()?;
            let content;
            syn::bracketed!(content in value);
            let names = Punctuated::<Ident, Token![,]>::parse_terminated_with(&content, Ident::parse_any)?;
            self.skip.extend(names.into_iter().map(|ident| ident.unraw()));
        } else if meta.path.is_ident("rename_all") {
            if self.rename_all.is_some() {
                return Err(duplicate(&meta, "rename_all"));
            }
            let lit: LitStr = meta.value()?.parse()?;
            self.rename_all = Some(parse_case(&lit)?);
        } else if meta.path.is_ident("accessors") {
            self.accessors = Some(meta.path.span());
        } else if meta.path.is_ident("partial_eq") {
            self.partial_eq = Some(meta.path.span());
        } else if meta.path.is_ident("auto_register") {
            self.auto_register = Some(meta.path.span());
        } else {
            return Err(meta.error(
                "unknown bean attribute, expected one of: skip, rename_all, accessors, partial_eq, auto_register",
            ));
        }
        Ok(())
    }
}

/// Re-cases an identifier, keeping digits attached to the preceding word.
pub(crate) fn recase(name: &str, case: Case) -> String {
    name.with_boundaries(&[
        Boundary::Underscore,
        Boundary::Hyphen,
        Boundary::Space,
        Boundary::LowerUpper,
        Boundary::DigitUpper,
        Boundary::Acronym,
    ])
    .to_case(case)
}

fn parse_case(lit: &LitStr) -> syn::Result<Case> {
    Ok(match lit.value().as_str() {
        "camelCase" => Case::Camel,
        "PascalCase" => Case::Pascal,
        "snake_case" => Case::Snake,
        "kebab-case" => Case::Kebab,
        "SCREAMING_SNAKE_CASE" => Case::UpperSnake,
        _ => {
            return Err(syn::Error::new(
                lit.span(),
                "expected one of: camelCase, PascalCase, snake_case, kebab-case, SCREAMING_SNAKE_CASE",
            ));
        }
    })
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Converter declared on a field.
pub(crate) enum ConverterAttr {
    /// `converter = path::to::function`
    Func(Path),
    /// `converter_type = SomeType`, built with `Default`
    Type(Type),
    /// `converter_with = SomeType { .. }`
    Object(Expr),
}

/// `mock(value = .., comment = "..", kind = Int, enums = Type)`
#[derive(Default)]
pub(crate) struct MockAttr {
    pub value: Option<Expr>,
    pub comment: Option<LitStr>,
    pub kind: Option<Ident>,
    pub enums: Option<Type>,
}

const MOCK_KINDS: &[&str] = &[
    "Int",
    "String",
    "Bool",
    "Float",
    "Object",
    "Array",
    "ObjectArray",
    "Enum",
];

impl MockAttr {
    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("value") {
            self.value = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("comment") {
            self.comment = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("kind") {
            let kind: Ident = meta.value()?.parse()?;
            if !MOCK_KINDS.iter().any(|k| kind == k) {
                return Err(syn::Error::new(
                    kind.span(),
                    format!("unknown mock kind, expected one of: {}", MOCK_KINDS.join(", ")),
                ));
            }
            self.kind = Some(kind);
        } else if meta.path.is_ident("enums") {
            self.enums = Some(meta.value()?.parse()?);
        } else {
            return Err(meta.error("unknown mock attribute, expected one of: value, comment, kind, enums"));
        }
        Ok(())
    }

    /// The declared kind, or one inferred from the value literal.
    pub fn kind(&self) -> Ident {
        if let Some(kind) = &self.kind {
            return kind.clone();
        }
        let span = Span::call_site();
        let name = match &self.value {
            _ if self.enums.is_some() => "Enum",
            Some(expr) => match literal_of(expr) {
                Some(Lit::Int(_)) => "Int",
                Some(Lit::Float(_)) => "Float",
                Some(Lit::Bool(_)) => "Bool",
                _ => "String",
            },
            None => "String",
        };
        Ident::new(name, span)
    }
}

fn literal_of(expr: &Expr) -> Option<&Lit> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => Some(lit),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => literal_of(expr),
        _ => None,
    }
}

/// Field-level attributes of `#[derive(Bean)]`.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `alias = "externalKey"`
    pub alias: Option<LitStr>,
    /// `skip`
    pub skip: Option<Span>,
    pub converter: Option<ConverterAttr>,
    /// `list = ElementType`
    pub list: Option<Type>,
    /// `union = "discriminator"`
    pub union: Option<LitStr>,
    pub mock: Option<MockAttr>,
}

impl FieldAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for_each_bean_meta(attrs, |meta| this.parse_meta(meta))?;
        this.validate()?;
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("alias") {
            if self.alias.is_some() {
                return Err(duplicate(&meta, "alias"));
            }
            self.alias = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("skip") {
            self.skip = Some(meta.path.span());
        } else if ["converter", "converter_type", "converter_with"]
            .iter()
            .any(|name| meta.path.is_ident(name))
        {
            if self.converter.is_some() {
                return Err(duplicate(&meta, "converter"));
            }
            self.converter = Some(if meta.path.is_ident("converter") {
                ConverterAttr::Func(meta.value()?.parse()?)
            } else if meta.path.is_ident("converter_type") {
                ConverterAttr::Type(meta.value()?.parse()?)
            } else {
                ConverterAttr::Object(meta.value()?.parse()?)
            });
        } else if meta.path.is_ident("list") {
            if self.list.is_some() {
                return Err(duplicate(&meta, "list"));
            }
            self.list = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("union") {
            if self.union.is_some() {
                return Err(duplicate(&meta, "union"));
            }
            self.union = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("mock") {
            if self.mock.is_some() {
                return Err(duplicate(&meta, "mock"));
            }
            let mut mock = MockAttr::default();
            meta.parse_nested_meta(|inner| mock.parse_meta(inner))?;
            self.mock = Some(mock);
        } else {
            return Err(meta.error(
                "unknown bean field attribute, expected one of: alias, skip, converter, converter_type, converter_with, list, union, mock",
            ));
        }
        Ok(())
    }

    fn validate(&self) -> syn::Result<()> {
        if let (Some(union), Some(list)) = (&self.union, &self.list) {
            let mut err = syn::Error::new(union.span(), "a union field cannot also be a list");
            err.combine(syn::Error::new(list.span(), "list declared here"));
            return Err(err);
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// VariantAttributes

/// Variant-level attributes of `#[derive(BeanUnion)]`.
#[derive(Default)]
pub(crate) struct VariantAttributes {
    /// `tag = "discriminatorValue"`
    pub tag: Option<LitStr>,
}

impl VariantAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for_each_bean_meta(attrs, |meta| {
            if meta.path.is_ident("tag") {
                if this.tag.is_some() {
                    return Err(duplicate(&meta, "tag"));
                }
                this.tag = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unknown bean variant attribute, expected: tag"))
            }
        })?;
        Ok(this)
    }
}
