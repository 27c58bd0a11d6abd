use crate::model::{DeriveFlag, DeriveFlagSet};

impl TryFrom<syn::DeriveInput> for DeriveFlagSet {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let struct_name = value.ident.clone();

        match &value.data {
            syn::Data::Struct(ds) => {
                let flags = match &ds.fields {
                    syn::Fields::Named(fields) => fields
                        .named
                        .iter()
                        .map(DeriveFlag::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                    syn::Fields::Unit => Vec::default(),
                    syn::Fields::Unnamed(_) => {
                        return Err(syn::Error::new(
                            struct_name.span(),
                            "Invalid - flags must be named fields.",
                        ));
                    }
                };

                Ok(DeriveFlagSet { struct_name, flags })
            }
            _ => Err(syn::Error::new(
                struct_name.span(),
                "Invalid - `Flags` may only be derived for a struct.",
            )),
        }
    }
}
