use proc_macro2::TokenStream;
use quote::quote_spanned;

use super::trait_bean::bean_bounds;
use crate::derive_data::BeanStruct;

/// Generate `PartialEq` through the canonical plain maps.
pub(crate) fn impl_partial_eq(bean: &BeanStruct) -> TokenStream {
    let Some(span) = bean.attrs.partial_eq else {
        return crate::utils::empty();
    };
    let meta = &bean.meta;
    let ser_ = crate::path::ser_(meta.bean_engine_path());
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(bean_bounds(bean));
    let ident = meta.ident();

    quote_spanned! { span =>
        impl #impl_generics ::core::cmp::PartialEq for #ident #ty_generics #where_clause {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                #ser_::bean_eq(self, other)
            }
        }
    }
}
