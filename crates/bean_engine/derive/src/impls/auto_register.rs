use crate::derive_data::BeanStruct;

/// Generate the `inventory` submission of `#[bean(auto_register)]`.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(bean: &BeanStruct) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    let Some(span) = bean.attrs.auto_register else {
        return crate::utils::empty();
    };
    // Generic beans have no single type to register.
    if bean.meta.impl_with_generic() {
        return crate::utils::empty();
    }

    let auto_register_ = crate::path::auto_register_(bean.meta.bean_engine_path());
    let ident = bean.meta.ident();

    quote_spanned! { span =>
        #auto_register_::inventory::submit! {
            #auto_register_::__AutoRegisterFunc(#auto_register_::__register::<#ident>)
        }
    }
}

#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &BeanStruct) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
