use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveFlag, DeriveValue, FieldKind, Requirement};

impl DeriveFlag {
    /// The expression constructing the `Flag` of this field.
    pub fn flag_expression(&self) -> TokenStream2 {
        let flag_type = &self.flag_type.tokens;
        let key = &self.key.tokens;
        let aliases = self.aliases.iter().map(|alias| {
            let tokens = &alias.tokens;
            quote! { .alias(#tokens) }
        });
        let help = match &self.help {
            Some(DeriveValue { tokens }) => quote! { .help(#tokens) },
            None => quote! {},
        };
        let default = match &self.default {
            Some(DeriveValue { tokens }) => {
                // String literals need converting for `Flag<String>`.
                if syn::parse2::<syn::LitStr>(tokens.clone()).is_ok() {
                    quote! { .default_value(::std::convert::Into::into(#tokens)) }
                } else {
                    quote! { .default_value(#tokens) }
                }
            }
            None => quote! {},
        };
        let min = match &self.min {
            Some(DeriveValue { tokens }) => quote! { .min(#tokens) },
            None => quote! {},
        };
        let max = match &self.max {
            Some(DeriveValue { tokens }) => quote! { .max(#tokens) },
            None => quote! {},
        };
        let requirement = match (self.requirement, self.field_kind) {
            (Requirement::Mandatory, _) => quote! { .mandatory() },
            (Requirement::Optional, _) | (Requirement::Implicit, FieldKind::Optional) => {
                quote! { .optional() }
            }
            (Requirement::Implicit, FieldKind::Required) => quote! {},
        };

        quote! {
            ::flagspec::Flag::<#flag_type>::new(#key) #( #aliases )* #help #default #min #max #requirement
        }
    }

    /// The field initializer reading this flag from `options`.
    pub fn field_initializer(&self) -> TokenStream2 {
        let field_name = &self.field_name;
        let flag = self.flag_expression();

        match self.field_kind {
            FieldKind::Optional => quote! { #field_name: #flag.get(options) },
            FieldKind::Required => quote! { #field_name: #flag.require(options)? },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::{Literal, Span};
    use quote::ToTokens;

    fn derive_flag(field_kind: FieldKind, requirement: Requirement) -> DeriveFlag {
        DeriveFlag {
            field_name: syn::Ident::new("port", Span::call_site()),
            flag_type: DeriveValue {
                tokens: quote! { u16 },
            },
            field_kind,
            key: DeriveValue {
                tokens: Literal::string("--port").into_token_stream(),
            },
            aliases: Vec::default(),
            help: None,
            default: None,
            min: None,
            max: None,
            requirement,
        }
    }

    #[test]
    fn render_flag_minimal() {
        // Setup
        let flag = derive_flag(FieldKind::Required, Requirement::Implicit);

        // Execute
        let tokens = flag.flag_expression();

        // Verify
        assert_eq!(
            tokens.to_string(),
            quote! { ::flagspec::Flag::<u16>::new("--port") }.to_string()
        );
    }

    #[test]
    fn render_flag_full() {
        // Setup
        let mut flag = derive_flag(FieldKind::Required, Requirement::Mandatory);
        flag.aliases = vec![
            DeriveValue {
                tokens: Literal::string("-p").into_token_stream(),
            },
            DeriveValue {
                tokens: Literal::string("-P").into_token_stream(),
            },
        ];
        flag.help = Some(DeriveValue {
            tokens: Literal::string("The port.").into_token_stream(),
        });
        flag.default = Some(DeriveValue {
            tokens: quote! { 8080 },
        });
        flag.min = Some(DeriveValue {
            tokens: quote! { 1024 },
        });
        flag.max = Some(DeriveValue {
            tokens: quote! { 9000 },
        });

        // Execute
        let tokens = flag.flag_expression();

        // Verify
        assert_eq!(
            tokens.to_string(),
            quote! {
                ::flagspec::Flag::<u16>::new("--port")
                    .alias("-p")
                    .alias("-P")
                    .help("The port.")
                    .default_value(8080)
                    .min(1024)
                    .max(9000)
                    .mandatory()
            }
            .to_string()
        );
    }

    #[test]
    fn render_flag_string_default() {
        // Setup
        let mut flag = derive_flag(FieldKind::Required, Requirement::Optional);
        flag.flag_type = DeriveValue {
            tokens: quote! { String },
        };
        flag.default = Some(DeriveValue {
            tokens: Literal::string("localhost").into_token_stream(),
        });

        // Execute
        let tokens = flag.flag_expression();

        // Verify
        assert_eq!(
            tokens.to_string(),
            quote! {
                ::flagspec::Flag::<String>::new("--port")
                    .default_value(::std::convert::Into::into("localhost"))
                    .optional()
            }
            .to_string()
        );
    }

    #[test]
    fn render_field_initializer() {
        // Setup
        let required = derive_flag(FieldKind::Required, Requirement::Implicit);
        let optional = derive_flag(FieldKind::Optional, Requirement::Implicit);

        // Execute
        let required_tokens = required.field_initializer();
        let optional_tokens = optional.field_initializer();

        // Verify
        assert_eq!(
            required_tokens.to_string(),
            quote! { port: ::flagspec::Flag::<u16>::new("--port").require(options)? }.to_string()
        );
        assert_eq!(
            optional_tokens.to_string(),
            quote! { port: ::flagspec::Flag::<u16>::new("--port").optional().get(options) }
                .to_string()
        );
    }
}
