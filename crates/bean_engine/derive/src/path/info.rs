use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn bean_info_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::BeanInfo }
}

#[inline(always)]
pub(crate) fn union_info_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::UnionInfo }
}

#[inline(always)]
pub(crate) fn union_variant_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::UnionVariant }
}

#[inline(always)]
pub(crate) fn field_descriptor_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::FieldDescriptor }
}

#[inline(always)]
pub(crate) fn field_type_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::FieldType }
}

#[inline(always)]
pub(crate) fn mock_spec_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::MockSpec }
}

#[inline(always)]
pub(crate) fn mock_type_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::MockType }
}

#[inline(always)]
pub(crate) fn non_generic_bean_info_cell_(path: &syn::Path) -> TokenStream {
    quote! { #path::impls::NonGenericBeanInfoCell }
}

#[inline(always)]
pub(crate) fn generic_bean_info_cell_(path: &syn::Path) -> TokenStream {
    quote! { #path::impls::GenericBeanInfoCell }
}

#[inline(always)]
pub(crate) fn non_generic_union_info_cell_(path: &syn::Path) -> TokenStream {
    quote! { #path::impls::NonGenericUnionInfoCell }
}

#[inline(always)]
pub(crate) fn generic_union_info_cell_(path: &syn::Path) -> TokenStream {
    quote! { #path::impls::GenericUnionInfoCell }
}
