use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::BeanUnionEnum;

/// Generate `BeanUnion`, `FromValue` and `IntoValue` of a union enum.
///
/// Variant `i` of the `UnionInfo` is the `i`-th enum variant, which is
/// the index `FromValue::from_variant` receives.
pub(crate) fn impl_trait_union(union: &BeanUnionEnum) -> TokenStream {
    let meta = &union.meta;
    let path = meta.bean_engine_path();
    let bean_ = crate::path::bean_(path);
    let bean_union_ = crate::path::bean_union_(path);
    let from_value_ = crate::path::from_value_(path);
    let into_value_ = crate::path::into_value_(path);
    let union_info_ = crate::path::union_info_(path);
    let union_variant_ = crate::path::union_variant_(path);
    let field_type_ = crate::path::field_type_(path);
    let value_error_ = crate::path::value_error_(path);
    let json_value_ = crate::path::json_value_(path);
    let key_style_ = crate::path::key_style_(path);

    let idents: Vec<_> = union.variants.iter().map(|v| v.ident).collect();
    let tys: Vec<_> = union.variants.iter().map(|v| v.ty).collect();
    let tags = union.variants.iter().map(|v| &v.tag);
    let names = idents.iter().map(|ident| ident.to_string());
    let indices: Vec<usize> = (0..union.variants.len()).collect();

    let info_tokens = quote! {
        #union_info_::new::<Self>(::std::vec![
            #( #union_variant_::new(#tags, #names, <#tys as #bean_>::bean_info) ),*
        ])
    };
    let cell_tokens = meta.cell_tokens(
        crate::path::generic_union_info_cell_(path),
        crate::path::non_generic_union_info_cell_(path),
        info_tokens,
    );

    let bounds = if meta.impl_with_generic() {
        let mut bounds = vec![quote!(Self: 'static)];
        bounds.extend(tys.iter().map(|ty| quote!(#ty: #bean_)));
        bounds
    } else {
        Vec::new()
    };
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(bounds);
    let ident = meta.ident();
    let ident_str = ident.to_string();

    // An uninhabited union still needs a match arm.
    let unreachable = idents
        .is_empty()
        .then(|| quote!(_ => ::core::unreachable!(),));

    quote! {
        impl #impl_generics #bean_union_ for #ident #ty_generics #where_clause {
            fn union_info() -> &'static #union_info_ {
                #cell_tokens
            }
        }

        impl #impl_generics #from_value_ for #ident #ty_generics #where_clause {
            /// Without a discriminator no variant can be chosen.
            #[inline]
            fn from_value(value: #json_value_) -> ::core::result::Result<Self, #value_error_> {
                ::core::result::Result::Err(#value_error_::mismatch(#ident_str, &value))
            }

            #[inline]
            fn field_type() -> #field_type_ {
                #field_type_::Union(<Self as #bean_union_>::union_info)
            }

            fn from_variant(
                index: usize,
                value: #json_value_,
            ) -> ::core::result::Result<Self, #value_error_> {
                match index {
                    #( #indices => <#tys as #from_value_>::from_value(value).map(Self::#idents), )*
                    _ => ::core::result::Result::Err(#value_error_::mismatch(#ident_str, &value)),
                }
            }
        }

        impl #impl_generics #into_value_ for #ident #ty_generics #where_clause {
            fn to_value(&self, style: #key_style_) -> #json_value_ {
                match self {
                    #( Self::#idents(inner) => #into_value_::to_value(inner, style), )*
                    #unreachable
                }
            }
        }
    }
}
