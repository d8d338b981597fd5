use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::Path;
use syn::spanned::Spanned;

use crate::derive_data::{BeanField, ConverterAttr, MockAttr};

/// The `FieldDescriptor` expression of one field.
///
/// ```ignore
/// _path_::info::FieldDescriptor::new::<Ty>("name")
///     .with_alias("alias")
///     .with_list::<Ty, Elem>()
///     .with_union("disc")
///     .with_converter(...)
///     .with_mock(...)
/// ```
pub(super) fn field_descriptor_tokens(path: &Path, field: &BeanField) -> TokenStream {
    let field_descriptor_ = crate::path::field_descriptor_(path);
    let ty = field.ty;
    let name = &field.name;

    let with_alias = field.alias.as_ref().map(|alias| quote!(.with_alias(#alias)));

    // Fails to compile unless `ty` is a list of `elem` beans.
    let with_list = field.attrs.list.as_ref().map(|elem| {
        quote_spanned! { elem.span() =>
            .with_list::<#ty, #elem>()
        }
    });

    let with_union = field.attrs.union.as_ref().map(|disc| quote!(.with_union(#disc)));

    let with_converter = field.attrs.converter.as_ref().map(|conv| {
        let converter_ref_ = crate::path::converter_ref_(path);
        match conv {
            ConverterAttr::Func(func) => {
                let func_name = quote!(#func).to_string().replace(' ', "");
                quote_spanned! { func.span() =>
                    .with_converter(#converter_ref_::func(#func_name, #func))
                }
            }
            ConverterAttr::Type(conv_ty) => quote_spanned! { conv_ty.span() =>
                .with_converter(#converter_ref_::of::<#conv_ty>())
            },
            ConverterAttr::Object(conv) => quote_spanned! { conv.span() =>
                .with_converter(#converter_ref_::new(#conv))
            },
        }
    });

    let with_mock = field.attrs.mock.as_ref().map(|mock| mock_tokens(path, mock));

    quote! {
        #field_descriptor_::new::<#ty>(#name)
            #with_alias
            #with_list
            #with_union
            #with_converter
            #with_mock
    }
}

fn mock_tokens(path: &Path, mock: &MockAttr) -> TokenStream {
    let mock_spec_ = crate::path::mock_spec_(path);
    let mock_type_ = crate::path::mock_type_(path);
    let kind = mock.kind();

    let with_value = mock.value.as_ref().map(|value| quote!(.with_value(#value)));
    let with_comment = mock.comment.as_ref().map(|comment| quote!(.with_comment(#comment)));
    let with_enums = mock.enums.as_ref().map(|enums| {
        quote_spanned! { enums.span() =>
            .with_enums::<#enums>()
        }
    });

    quote! {
        .with_mock(
            #mock_spec_::new(#mock_type_::#kind)
                #with_value
                #with_comment
                #with_enums
        )
    }
}
