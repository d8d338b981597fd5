//! Paths of engine items used by generated code.
//!
//! Kept in one place so that moving an item in `bean_engine` only touches
//! this module.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Path of the `bean_engine` crate as seen from the deriving crate.
///
/// Resolved from the caller's `Cargo.toml`:
///
/// 1. Crates depending on `bean_engine` get `::bean_engine`.
/// 2. Crates depending on the `beans` facade get `::beans::engine`.
/// 3. Otherwise `::bean_engine`, which also covers the engine itself.
///
/// Reading the manifest is not free, so the path is computed once per
/// derive and passed around.
pub(crate) fn bean_engine() -> syn::Path {
    bean_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("bean_engine"))
}

// -----------------------------------------------------------------------------
// Modules

mod info;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use info::*;

#[inline(always)]
pub(crate) fn bean_(path: &syn::Path) -> TokenStream {
    quote! { #path::Bean }
}

#[inline(always)]
pub(crate) fn bean_union_(path: &syn::Path) -> TokenStream {
    quote! { #path::BeanUnion }
}

#[inline(always)]
pub(crate) fn bean_error_(path: &syn::Path) -> TokenStream {
    quote! { #path::BeanError }
}

#[inline(always)]
pub(crate) fn from_value_(path: &syn::Path) -> TokenStream {
    quote! { #path::FromValue }
}

#[inline(always)]
pub(crate) fn into_value_(path: &syn::Path) -> TokenStream {
    quote! { #path::IntoValue }
}

#[inline(always)]
pub(crate) fn key_style_(path: &syn::Path) -> TokenStream {
    quote! { #path::KeyStyle }
}

#[inline(always)]
pub(crate) fn value_error_(path: &syn::Path) -> TokenStream {
    quote! { #path::value::ValueError }
}

#[inline(always)]
pub(crate) fn json_value_(path: &syn::Path) -> TokenStream {
    quote! { #path::__macro_exports::serde_json::Value }
}

#[inline(always)]
pub(crate) fn hydrate_(path: &syn::Path) -> TokenStream {
    quote! { #path::hydrate }
}

#[inline(always)]
pub(crate) fn ser_(path: &syn::Path) -> TokenStream {
    quote! { #path::ser }
}

#[inline(always)]
pub(crate) fn converter_ref_(path: &syn::Path) -> TokenStream {
    quote! { #path::convert::ConverterRef }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(path: &syn::Path) -> TokenStream {
    quote! { #path::__macro_exports::auto_register }
}
