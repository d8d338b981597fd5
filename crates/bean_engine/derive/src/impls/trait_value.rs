use proc_macro2::TokenStream;
use quote::quote;

use super::trait_bean::bean_bounds;
use crate::derive_data::BeanStruct;

/// Generate `FromValue` and `IntoValue` of a bean: maps in, maps out.
pub(crate) fn impl_bean_value(bean: &BeanStruct) -> TokenStream {
    let meta = &bean.meta;
    let path = meta.bean_engine_path();
    let from_value_ = crate::path::from_value_(path);
    let into_value_ = crate::path::into_value_(path);
    let bean_ = crate::path::bean_(path);
    let value_error_ = crate::path::value_error_(path);
    let json_value_ = crate::path::json_value_(path);
    let field_type_ = crate::path::field_type_(path);
    let key_style_ = crate::path::key_style_(path);
    let hydrate_ = crate::path::hydrate_(path);
    let ser_ = crate::path::ser_(path);

    let (impl_generics, ty_generics, where_clause) = meta.split_generics(bean_bounds(bean));
    let ident = meta.ident();

    quote! {
        impl #impl_generics #from_value_ for #ident #ty_generics #where_clause {
            #[inline]
            fn from_value(value: #json_value_) -> ::core::result::Result<Self, #value_error_> {
                #hydrate_::bean_from_value::<Self>(value)
            }

            #[inline]
            fn field_type() -> #field_type_ {
                #field_type_::Bean(<Self as #bean_>::bean_info)
            }
        }

        impl #impl_generics #into_value_ for #ident #ty_generics #where_clause {
            #[inline]
            fn to_value(&self, style: #key_style_) -> #json_value_ {
                #ser_::bean_to_value(self, style)
            }
        }
    }
}
