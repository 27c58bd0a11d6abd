use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveFlagSet;

impl From<DeriveFlagSet> for TokenStream2 {
    fn from(value: DeriveFlagSet) -> Self {
        let DeriveFlagSet { struct_name, flags } = value;
        let flag_expressions = flags.iter().map(|flag| flag.flag_expression());
        let field_initializers = flags.iter().map(|flag| flag.field_initializer());

        quote! {
            impl ::flagspec::prelude::FlagSet for #struct_name {
                fn arg_specs() -> ::std::vec::Vec<::flagspec::ArgSpec> {
                    ::std::vec![ #( #flag_expressions.to_arg_spec() ),* ]
                }

                #[allow(unused_variables)]
                fn from_options(
                    options: &::flagspec::CommandLineOptions,
                ) -> ::std::result::Result<Self, ::flagspec::InvalidCommandLine> {
                    ::std::result::Result::Ok(Self { #( #field_initializers ),* })
                }
            }
        }
    }
}
