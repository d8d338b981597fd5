//! See following macros:
//!
//! - [`Bean`]
//! - [`BeanUnion`]
#![cfg_attr(docsrs, feature(doc_cfg))]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static BEAN_ATTRIBUTE_NAME: &str = "bean";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Bean Derivation
///
/// `#[derive(Bean)]` implements the following traits for a struct with
/// named fields:
///
/// - `Bean`
/// - `FromValue` (a map hydrates the bean)
/// - `IntoValue` (the bean becomes its plain map)
///
/// The struct must implement `Default`, which provides the value of every
/// field that the input does not carry.
///
/// ## Keys
///
/// A field is read from the input under its alias, its declared name, then
/// its snake_case key. Output uses the snake_case key or, with
/// `KeyStyle::Declared`, the alias or declared name.
///
/// ```rust, ignore
/// #[derive(Bean, Default)]
/// #[bean(rename_all = "camelCase")]
/// struct User {
///     user_id: u64,                        // read as "userId" or "user_id"
///     #[bean(alias = "lastLoginIp")]
///     latest_login_ip: String,
/// }
/// ```
///
/// `rename_all` accepts `camelCase`, `PascalCase`, `snake_case`,
/// `kebab-case` and `SCREAMING_SNAKE_CASE`. An explicit `alias` wins over it.
///
/// ## Exclusion
///
/// Excluded fields are neither hydrated nor serialized and keep their
/// default value:
///
/// ```rust, ignore
/// #[derive(Bean, Default)]
/// #[bean(skip = [pivot])]
/// struct A {
///     pivot: String,
///     #[bean(skip)]
///     cache: Vec<u8>,
///     _marker: PhantomData<u8>,  // leading underscore
///     name: String,
/// }
/// ```
///
/// ## Converters
///
/// A converter rewrites the raw value before it is typed. When it fails the
/// raw value is used instead, which pairs well with `Converted<T>`:
///
/// ```rust, ignore
/// #[derive(Bean, Default)]
/// struct Query {
///     #[bean(converter = bean_engine::convert::intval)]
///     page: Converted<i64>,
///     #[bean(converter_type = Trim)]  // `Trim: Converter + Default`
///     keyword: String,
///     #[bean(converter_with = Clamp { min: 1, max: 100 })]
///     size: Converted<i64>,
/// }
/// ```
///
/// ## Lists, Nested Beans and Unions
///
/// Fields whose type derives `Bean` hydrate recursively, as do `Vec`s of
/// them, through `Option`, `Box` and `Converted` as well. `list = Elem`
/// states the element bean explicitly; it is checked against the field
/// type, so `#[bean(list = Book)] books: Vec<Value>` does not compile.
///
/// `union = "field"` selects the variant of a `BeanUnion` type by the value
/// of a sibling field:
///
/// ```rust, ignore
/// #[derive(Bean, Default)]
/// struct Component {
///     r#type: String,
///     #[bean(union = "type")]
///     settings: Option<Settings>,
/// }
/// ```
///
/// ## Mock Data
///
/// `mock(value = .., comment = "..", kind = Int, enums = Type)` attaches
/// sample data for `mock::mock_data`. The kind is inferred from the value
/// literal when omitted; `enums` takes a type implementing `MockEnum`.
///
/// ## Flags
///
/// - `accessors`: `field()` and `set_field(value)` inherent methods.
/// - `partial_eq`: `PartialEq` comparing the plain maps.
/// - `auto_register`: collected by `BeanRegistry::auto_register`. No effect
///   on generic types, or without the `auto_register` feature.
#[proc_macro_derive(Bean, attributes(bean))]
pub fn derive_bean(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let bean = match derive_data::BeanStruct::from_derive_input(&ast) {
        Ok(bean) => bean,
        Err(err) => return err.into_compile_error().into(),
    };

    let bean_impl = impls::impl_trait_bean(&bean);
    let value_impl = impls::impl_bean_value(&bean);
    let accessors_impl = impls::impl_accessors(&bean);
    let partial_eq_impl = impls::impl_partial_eq(&bean);
    let auto_register = impls::get_auto_register_impl(&bean);

    TokenStream::from(quote! {
        const _: () = {
            #bean_impl

            #value_impl

            #partial_eq_impl

            #auto_register
        };

        #accessors_impl
    })
}

/// # Bean Union Derivation
///
/// `#[derive(BeanUnion)]` implements `BeanUnion`, `FromValue` and
/// `IntoValue` for an enum whose variants each hold one bean.
///
/// The tag of a variant is its snake_case name unless `tag` says otherwise.
///
/// ```rust, ignore
/// #[derive(BeanUnion)]
/// enum Settings {
///     Text(TextSettings),                  // tag "text"
///     #[bean(tag = "num")]
///     Number(NumberSettings),
/// }
/// ```
///
/// A union type only hydrates as a field marked `#[bean(union = "..")]`.
#[proc_macro_derive(BeanUnion, attributes(bean))]
pub fn derive_bean_union(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let union = match derive_data::BeanUnionEnum::from_derive_input(&ast) {
        Ok(union) => union,
        Err(err) => return err.into_compile_error().into(),
    };

    let union_impl = impls::impl_trait_union(&union);

    TokenStream::from(quote! {
        const _: () = {
            #union_impl
        };
    })
}
