use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, Type};

use super::{BeanMeta, FieldAttributes, TypeAttributes, recase};

/// One hydrated field of a bean.
pub(crate) struct BeanField<'a> {
    /// The field as written, possibly a raw identifier.
    pub member: &'a Ident,
    /// Declared name without the `r#` prefix.
    pub name: String,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
    /// Explicit alias, or the `rename_all` projection when it differs.
    pub alias: Option<String>,
}

/// A struct deriving `Bean`.
pub(crate) struct BeanStruct<'a> {
    pub meta: BeanMeta<'a>,
    pub attrs: TypeAttributes,
    /// Hydrated fields, in declaration order.
    pub fields: Vec<BeanField<'a>>,
    /// Names of skipped and `_`-prefixed fields.
    pub excluded: Vec<String>,
}

impl<'a> BeanStruct<'a> {
    pub fn from_derive_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new(
                ast.ident.span(),
                "`Bean` can only be derived for structs, use `BeanUnion` for enums",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new(
                data.fields.span(),
                "`Bean` requires named fields",
            ));
        };

        let attrs = TypeAttributes::parse(&ast.attrs)?;
        let mut fields = Vec::new();
        let mut excluded = Vec::new();

        for field in &named.named {
            let Some(member) = field.ident.as_ref() else {
                continue;
            };
            let name = member.unraw().to_string();
            let field_attrs = FieldAttributes::parse(&field.attrs)?;

            let skipped = field_attrs.skip.is_some()
                || name.starts_with('_')
                || attrs.skip.iter().any(|s| *s == name);
            if skipped {
                excluded.push(name);
                continue;
            }

            let alias = match (&field_attrs.alias, attrs.rename_all) {
                (Some(alias), _) => Some(alias.value()),
                (None, Some(case)) => Some(recase(&name, case)).filter(|renamed| *renamed != name),
                (None, None) => None,
            };

            fields.push(BeanField {
                member,
                name,
                ty: &field.ty,
                attrs: field_attrs,
                alias,
            });
        }

        for skip in &attrs.skip {
            if !excluded.iter().any(|name| *skip == name) {
                return Err(syn::Error::new(
                    skip.span(),
                    format!("`{skip}` is not a field of `{}`", ast.ident),
                ));
            }
        }

        check_discriminators(&fields, &excluded)?;

        Ok(Self {
            meta: BeanMeta::new(&ast.ident, &ast.generics),
            attrs,
            fields,
            excluded,
        })
    }
}

/// A `union` discriminator must name another field of the bean.
fn check_discriminators(fields: &[BeanField], excluded: &[String]) -> syn::Result<()> {
    for field in fields {
        let Some(disc) = &field.attrs.union else {
            continue;
        };
        let value = disc.value();
        if value == field.name {
            return Err(syn::Error::new(
                disc.span(),
                "a union field cannot be its own discriminator",
            ));
        }
        let known = fields.iter().any(|f| f.name == value) || excluded.contains(&value);
        if !known {
            return Err(syn::Error::new(
                disc.span(),
                format!("discriminator `{value}` is not a field of this bean"),
            ));
        }
    }
    Ok(())
}
