use convert_case::Case;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, Type};

use super::{BeanMeta, recase};
use super::attributes::VariantAttributes;

/// One `Variant(Bean)` of a union.
pub(crate) struct UnionVariantData<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// The discriminator value selecting this variant.
    pub tag: String,
}

/// An enum deriving `BeanUnion`.
pub(crate) struct BeanUnionEnum<'a> {
    pub meta: BeanMeta<'a>,
    pub variants: Vec<UnionVariantData<'a>>,
}

impl<'a> BeanUnionEnum<'a> {
    pub fn from_derive_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Enum(data) = &ast.data else {
            return Err(syn::Error::new(
                ast.ident.span(),
                "`BeanUnion` can only be derived for enums",
            ));
        };

        let mut variants = Vec::with_capacity(data.variants.len());
        for variant in &data.variants {
            let ty = match &variant.fields {
                Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
                _ => {
                    return Err(syn::Error::new(
                        variant.span(),
                        "`BeanUnion` variants must hold exactly one bean: `Variant(Bean)`",
                    ));
                }
            };

            let attrs = VariantAttributes::parse(&variant.attrs)?;
            let tag = match attrs.tag {
                Some(lit) => lit.value(),
                None => recase(&variant.ident.to_string(), Case::Snake),
            };
            if let Some(prev) = variants.iter().find(|v: &&UnionVariantData| v.tag == tag) {
                return Err(syn::Error::new(
                    variant.ident.span(),
                    format!("tag `{tag}` is already used by `{}`", prev.ident),
                ));
            }

            variants.push(UnionVariantData {
                ident: &variant.ident,
                ty,
                tag,
            });
        }

        Ok(Self {
            meta: BeanMeta::new(&ast.ident, &ast.generics),
            variants,
        })
    }
}
