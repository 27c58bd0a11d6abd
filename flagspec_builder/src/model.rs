use std::sync::Arc;

/// The acceptance predicate of an option value.
///
/// The predicate receives `None` when the option token carried no `=` (ex: `--verbose`), and `Some(value)` otherwise (ex: `--level=3` or `--level=`).
/// Validators are reference counted, so cloning an [`ArgSpec`](crate::ArgSpec) or [`CommandLineSpec`](crate::CommandLineSpec) is cheap.
#[derive(Clone)]
pub struct Validator(Arc<dyn Fn(Option<&str>) -> bool + Send + Sync>);

impl Validator {
    /// Create a validator from the predicate.
    pub fn new(predicate: impl Fn(Option<&str>) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    /// A validator which accepts any value, including no value at all.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// A validator which accepts only the value-less form of the option (ex: `--help`, but not `--help=`).
    pub fn absent() -> Self {
        Self::new(|value| value.is_none())
    }

    /// A validator which accepts any value, but rejects the value-less form of the option.
    pub fn present() -> Self {
        Self::new(|value| value.is_some())
    }

    /// A validator which accepts values from `values` only.
    pub fn whitelist<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        Self::new(move |value| matches!(value, Some(v) if values.iter().any(|w| w == v)))
    }

    /// A validator which rejects values from `values`.
    /// The value-less form of the option is accepted.
    pub fn blacklist<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        Self::new(move |value| !matches!(value, Some(v) if values.iter().any(|b| b == v)))
    }

    /// Combine with `other`; both validators must accept.
    pub fn and(self, other: Validator) -> Self {
        Self::new(move |value| self.test(value) && other.test(value))
    }

    /// Combine with `other`; either validator may accept.
    pub fn or(self, other: Validator) -> Self {
        Self::new(move |value| self.test(value) || other.test(value))
    }

    /// Apply the validator to an option value.
    pub fn test(&self, value: Option<&str>) -> bool {
        (self.0)(value)
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator{..}").finish()
    }
}

impl<F> From<F> for Validator
where
    F: Fn(Option<&str>) -> bool + Send + Sync + 'static,
{
    fn from(predicate: F) -> Self {
        Validator::new(predicate)
    }
}
