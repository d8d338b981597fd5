use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, Ident, ImplGenerics, Path, TypeGenerics, WhereClause};

/// Data shared by every generated impl of one item.
pub(crate) struct BeanMeta<'a> {
    bean_engine_path: Path,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl<'a> BeanMeta<'a> {
    pub fn new(ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            bean_engine_path: crate::path::bean_engine(),
            ident,
            generics,
        }
    }

    #[inline]
    pub fn bean_engine_path(&self) -> &Path {
        &self.bean_engine_path
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    /// Whether the item has type or const parameters.
    ///
    /// Such items need one info per instantiation.
    pub fn impl_with_generic(&self) -> bool {
        self.generics
            .params
            .iter()
            .any(|p| !matches!(p, syn::GenericParam::Lifetime(_)))
    }

    /// Splits the generics and extends the where clause with `bounds`.
    pub fn split_generics(
        &self,
        bounds: impl IntoIterator<Item = TokenStream>,
    ) -> (ImplGenerics<'a>, TypeGenerics<'a>, Option<WhereClause>) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let bounds: Vec<TokenStream> = bounds.into_iter().collect();
        if bounds.is_empty() {
            return (impl_generics, ty_generics, where_clause.cloned());
        }

        let mut where_clause = where_clause.cloned().unwrap_or_else(|| WhereClause {
            where_token: Default::default(),
            predicates: Default::default(),
        });
        for bound in bounds {
            where_clause.predicates.push(syn::parse_quote!(#bound));
        }
        (impl_generics, ty_generics, Some(where_clause))
    }

    /// `static CELL` plus its lookup, around `info_tokens`.
    pub fn cell_tokens(
        &self,
        generic_cell: TokenStream,
        non_generic_cell: TokenStream,
        info_tokens: TokenStream,
    ) -> TokenStream {
        if self.impl_with_generic() {
            quote! {
                static CELL: #generic_cell = #generic_cell::new();
                CELL.get_or_insert::<Self>(|| {
                    #info_tokens
                })
            }
        } else {
            quote! {
                static CELL: #non_generic_cell = #non_generic_cell::new();
                CELL.get_or_init(|| {
                    #info_tokens
                })
            }
        }
    }
}
