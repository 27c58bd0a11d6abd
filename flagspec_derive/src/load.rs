mod attribute;
mod flag;
mod flag_set;

fn incompatible_error(
    field_name: &syn::Ident,
    left: impl Into<String>,
    right: impl Into<String>,
) -> syn::Error {
    syn::Error::new(
        field_name.span(),
        format!(
            "Invalid - flag cannot be both `{}` and `{}`.",
            left.into(),
            right.into(),
        ),
    )
}
