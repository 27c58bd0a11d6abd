extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveFlagSet;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

#[proc_macro_derive(Flags, attributes(flag))]
pub fn flags(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveFlagSet::try_from(derive_input) {
        Ok(flag_set) => TokenStream2::from(flag_set).into(),
        Err(error) => error.to_compile_error().into(),
    }
}

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            match (&$base, &$sub) {
                (base, sub) => {
                    assert!(
                        base.contains(*sub),
                        "'{b}' does not contain '{s}'",
                        b = base,
                        s = sub,
                    );
                }
            }
        };
    }

    pub(crate) use assert_contains;
}
