use proc_macro2::TokenStream;
use quote::quote;

use super::field_descriptor::field_descriptor_tokens;
use crate::derive_data::BeanStruct;

/// Generate the implementation of `Bean`.
///
/// Field `i` of the descriptor list is the `i`-th hydrated field; the
/// generated `hydrate_fields` and `field_*` methods use the same indices.
pub(crate) fn impl_trait_bean(bean: &BeanStruct) -> TokenStream {
    let meta = &bean.meta;
    let path = meta.bean_engine_path();
    let bean_ = crate::path::bean_(path);
    let bean_info_ = crate::path::bean_info_(path);
    let bean_error_ = crate::path::bean_error_(path);
    let into_value_ = crate::path::into_value_(path);
    let hydrate_ = crate::path::hydrate_(path);

    let descriptors = bean
        .fields
        .iter()
        .map(|field| field_descriptor_tokens(path, field));
    let excluded = &bean.excluded;

    let info_tokens = quote! {
        #bean_info_::new::<Self>(
            ::std::vec![#(#descriptors),*],
            &[#(#excluded),*],
        )
    };
    let cell_tokens = meta.cell_tokens(
        crate::path::generic_bean_info_cell_(path),
        crate::path::non_generic_bean_info_cell_(path),
        info_tokens,
    );

    let indices: Vec<usize> = (0..bean.fields.len()).collect();
    let unused_cx = indices.is_empty().then(|| quote!(let _ = cx;));
    let members: Vec<_> = bean.fields.iter().map(|f| f.member).collect();

    let (impl_generics, ty_generics, where_clause) = meta.split_generics(bean_bounds(bean));
    let ident = meta.ident();

    quote! {
        impl #impl_generics #bean_ for #ident #ty_generics #where_clause {
            fn bean_info() -> &'static #bean_info_ {
                #cell_tokens
            }

            fn hydrate_fields(
                &mut self,
                cx: &#hydrate_::HydrateContext<'_>,
            ) -> ::core::result::Result<(), #bean_error_> {
                #unused_cx
                #( cx.field(#indices, &mut self.#members)?; )*
                ::core::result::Result::Ok(())
            }

            fn field_value(&self, index: usize) -> ::core::option::Option<&dyn #into_value_> {
                match index {
                    #( #indices => ::core::option::Option::Some(&self.#members), )*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_any(&self, index: usize) -> ::core::option::Option<&dyn ::core::any::Any> {
                match index {
                    #( #indices => ::core::option::Option::Some(&self.#members), )*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_any_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn ::core::any::Any> {
                match index {
                    #( #indices => ::core::option::Option::Some(&mut self.#members), )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

/// Extra where-bounds of generic beans: every hydrated field type must
/// convert both ways.
pub(super) fn bean_bounds(bean: &BeanStruct) -> Vec<TokenStream> {
    if !bean.meta.impl_with_generic() {
        return Vec::new();
    }
    let path = bean.meta.bean_engine_path();
    let from_value_ = crate::path::from_value_(path);
    let into_value_ = crate::path::into_value_(path);

    let mut bounds = vec![quote!(Self: ::core::default::Default + 'static)];
    bounds.extend(bean.fields.iter().map(|field| {
        let ty = field.ty;
        quote!(#ty: #from_value_ + #into_value_ + ::core::any::Any)
    }));
    bounds
}
