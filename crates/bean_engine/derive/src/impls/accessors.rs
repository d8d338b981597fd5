use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;

use crate::derive_data::BeanStruct;

/// Generate `field()` and `set_field()` for every hydrated field.
///
/// Setters assign directly and return `&mut Self` for chaining.
pub(crate) fn impl_accessors(bean: &BeanStruct) -> TokenStream {
    if bean.attrs.accessors.is_none() {
        return crate::utils::empty();
    }
    let meta = &bean.meta;
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(None);
    let ident = meta.ident();

    let methods = bean.fields.iter().map(|field| {
        let member = field.member;
        let ty = field.ty;
        let setter = format_ident!("set_{}", member.unraw());
        let get_doc = format!("Returns `{}`.", field.name);
        let set_doc = format!("Sets `{}`.", field.name);
        quote! {
            #[doc = #get_doc]
            #[inline]
            pub fn #member(&self) -> &#ty {
                &self.#member
            }

            #[doc = #set_doc]
            #[inline]
            pub fn #setter(&mut self, value: #ty) -> &mut Self {
                self.#member = value;
                self
            }
        }
    });

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    }
}
