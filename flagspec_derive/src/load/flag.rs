use crate::load::incompatible_error;
use crate::model::{DeriveFlag, DeriveValue, FieldKind, IntermediateAttributes, Requirement};
use quote::{quote, ToTokens};

impl TryFrom<&syn::Field> for DeriveFlag {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let attributes = IntermediateAttributes::load(&value.attrs)?;
        let field_name = value.ident.clone().ok_or_else(|| {
            syn::Error::new_spanned(value, "Invalid - flags must be named fields.")
        })?;
        let explicit_mandatory = attributes.singletons.contains("mandatory");
        let explicit_optional = attributes.singletons.contains("optional");

        if let Some(unknown) = attributes
            .singletons
            .iter()
            .find(|s| *s != "mandatory" && *s != "optional")
        {
            return Err(syn::Error::new(
                field_name.span(),
                format!("Invalid - unknown flag attribute `{unknown}`."),
            ));
        }

        if let Some(unknown) = attributes
            .pairs
            .keys()
            .find(|k| !["key", "alias", "help", "default", "min", "max"].contains(&k.as_str()))
        {
            return Err(syn::Error::new(
                field_name.span(),
                format!("Invalid - unknown flag attribute `{unknown} = ..`."),
            ));
        }

        if let Some(repeated) = ["key", "help", "default", "min", "max"]
            .into_iter()
            .find(|name| attributes.pairs.get(*name).map_or(0, Vec::len) > 1)
        {
            return Err(syn::Error::new(
                field_name.span(),
                format!("Invalid - flag attribute `{repeated} = ..` may only be given once."),
            ));
        }

        if explicit_mandatory && explicit_optional {
            return Err(incompatible_error(
                &field_name,
                "#[flag(mandatory)]",
                "#[flag(optional)]",
            ));
        }

        let key = match attributes.single("key") {
            Some(key) => key,
            None => {
                let implicit = format!("--{}", field_name.to_string().replace('_', "-"));
                DeriveValue {
                    tokens: quote! { #implicit },
                }
            }
        };
        let aliases = attributes.pairs.get("alias").cloned().unwrap_or_default();
        let help = attributes.single("help");
        let default = attributes.single("default");
        let min = attributes.single("min");
        let max = attributes.single("max");
        let requirement = if explicit_mandatory {
            Requirement::Mandatory
        } else if explicit_optional {
            Requirement::Optional
        } else {
            Requirement::Implicit
        };

        let (field_kind, flag_type) = match option_inner(&value.ty) {
            Some(inner) => {
                if default.is_some() {
                    return Err(incompatible_error(
                        &field_name,
                        "Option<..>",
                        "#[flag(default = ..)]",
                    ));
                }

                (FieldKind::Optional, inner.to_token_stream())
            }
            None => (FieldKind::Required, value.ty.to_token_stream()),
        };

        Ok(DeriveFlag {
            field_name,
            flag_type: DeriveValue { tokens: flag_type },
            field_kind,
            key,
            aliases,
            help,
            default,
            min,
            max,
            requirement,
        })
    }
}

// The `T` of an `Option<T>` field type.
fn option_inner(ty: &syn::Type) -> Option<&syn::Type> {
    let syn::Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;

    if segment.ident != "Option" {
        return None;
    }

    match &segment.arguments {
        syn::PathArguments::AngleBracketed(arguments) if arguments.args.len() == 1 => {
            match arguments.args.first() {
                Some(syn::GenericArgument::Type(inner)) => Some(inner),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use proc_macro2::{Literal, Span};
    use syn::parse_quote;

    #[test]
    fn construct_flag_implicit() {
        // Setup
        let field: syn::Field = parse_quote! {
            max_connections: u32
        };

        // Execute
        let flag = DeriveFlag::try_from(&field).unwrap();

        // Verify
        assert_eq!(
            flag,
            DeriveFlag {
                field_name: ident("max_connections"),
                flag_type: DeriveValue {
                    tokens: quote! { u32 },
                },
                field_kind: FieldKind::Required,
                key: DeriveValue {
                    tokens: Literal::string("--max-connections").into_token_stream(),
                },
                aliases: Vec::default(),
                help: None,
                default: None,
                min: None,
                max: None,
                requirement: Requirement::Implicit,
            }
        );
    }

    #[test]
    fn construct_flag_attributes() {
        // Setup
        let field: syn::Field = parse_quote! {
            #[flag(key = "--port", alias = "-p", alias = "-P", help = "The port.", default = 8080, min = 1024, mandatory)]
            port: u16
        };

        // Execute
        let flag = DeriveFlag::try_from(&field).unwrap();

        // Verify
        assert_eq!(
            flag,
            DeriveFlag {
                field_name: ident("port"),
                flag_type: DeriveValue {
                    tokens: quote! { u16 },
                },
                field_kind: FieldKind::Required,
                key: DeriveValue {
                    tokens: Literal::string("--port").into_token_stream(),
                },
                aliases: vec![
                    DeriveValue {
                        tokens: Literal::string("-p").into_token_stream(),
                    },
                    DeriveValue {
                        tokens: Literal::string("-P").into_token_stream(),
                    },
                ],
                help: Some(DeriveValue {
                    tokens: Literal::string("The port.").into_token_stream(),
                }),
                default: Some(DeriveValue {
                    tokens: quote! { 8080 },
                }),
                min: Some(DeriveValue {
                    tokens: quote! { 1024 },
                }),
                max: None,
                requirement: Requirement::Mandatory,
            }
        );
    }

    #[test]
    fn construct_flag_option() {
        // Setup
        let field: syn::Field = parse_quote! {
            #[flag(optional)]
            name: Option<String>
        };

        // Execute
        let flag = DeriveFlag::try_from(&field).unwrap();

        // Verify
        assert_eq!(flag.field_kind, FieldKind::Optional);
        assert_eq!(
            flag.flag_type,
            DeriveValue {
                tokens: quote! { String },
            }
        );
        assert_eq!(flag.requirement, Requirement::Optional);
    }

    #[test]
    fn construct_flag_qualified_option() {
        // Setup
        let field: syn::Field = parse_quote! {
            level: std::option::Option<i64>
        };

        // Execute
        let flag = DeriveFlag::try_from(&field).unwrap();

        // Verify
        assert_eq!(flag.field_kind, FieldKind::Optional);
        assert_eq!(
            flag.flag_type,
            DeriveValue {
                tokens: quote! { i64 },
            }
        );
    }

    #[test]
    fn construct_flag_mandatory_optional() {
        // Setup
        let field: syn::Field = parse_quote! {
            #[flag(mandatory, optional)]
            name: String
        };

        // Execute
        let error = DeriveFlag::try_from(&field).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "#[flag(mandatory)]");
        assert_contains!(error.to_string(), "#[flag(optional)]");
    }

    #[test]
    fn construct_flag_option_default() {
        // Setup
        let field: syn::Field = parse_quote! {
            #[flag(default = "x")]
            name: Option<String>
        };

        // Execute
        let error = DeriveFlag::try_from(&field).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "Option<..>");
        assert_contains!(error.to_string(), "#[flag(default = ..)]");
    }

    #[test]
    fn construct_flag_unknown() {
        // Setup
        let singleton: syn::Field = parse_quote! {
            #[flag(required)]
            name: String
        };
        let pair: syn::Field = parse_quote! {
            #[flag(short = "-n")]
            name: String
        };

        // Execute
        let singleton_error = DeriveFlag::try_from(&singleton).unwrap_err();
        let pair_error = DeriveFlag::try_from(&pair).unwrap_err();

        // Verify
        assert_contains!(singleton_error.to_string(), "`required`");
        assert_contains!(pair_error.to_string(), "`short = ..`");
    }

    #[test]
    fn construct_flag_repeated() {
        for attributes in [
            quote! { #[flag(key = "--a", key = "--b")] },
            quote! { #[flag(help = "a", help = "b")] },
            quote! { #[flag(default = 1, default = 2)] },
            quote! { #[flag(min = 1, min = 2)] },
            quote! { #[flag(max = 1)] #[flag(max = 2)] },
        ] {
            // Setup
            let field: syn::Field = parse_quote! {
                #attributes
                count: u32
            };

            // Execute
            let error = DeriveFlag::try_from(&field).unwrap_err();

            // Verify
            assert_contains!(error.to_string(), "may only be given once");
        }
    }

    #[test]
    fn construct_flag_repeated_alias() {
        // Setup
        let field: syn::Field = parse_quote! {
            #[flag(alias = "-c")]
            #[flag(alias = "-C")]
            count: u32
        };

        // Execute
        let flag = DeriveFlag::try_from(&field).unwrap();

        // Verify
        assert_eq!(flag.aliases.len(), 2);
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
