use std::collections::{HashMap, HashSet};

use crate::constant::*;
use crate::model::Validator;
use crate::parser::{is_option, to_exposed_key, ConfigError};

/// The declaration of one recognized option.
///
/// An `ArgSpec` starts out mandatory and accepting any value.
/// Configure it by chaining the builder methods.
///
/// ### Example
/// ```
/// # use flagspec_builder as flagspec;
/// use flagspec::ArgSpec;
///
/// let spec = ArgSpec::new("--level")
///     .alias("-l")
///     .optional()
///     .validator(|value: Option<&str>| matches!(value, Some("1" | "2" | "3")))
///     .help("The verbosity level.");
///
/// assert_eq!(spec.key(), "--level");
/// assert!(!spec.is_mandatory());
/// assert!(spec.validate(Some("2")));
/// assert!(!spec.validate(None));
/// assert_eq!(spec.to_human_description(), "`--level` [-l]");
/// ```
#[derive(Debug, Clone)]
pub struct ArgSpec {
    key: String,
    aliases: Vec<String>,
    validator: Validator,
    mandatory: bool,
    help: String,
}

impl ArgSpec {
    /// Declare an option by its canonical key (ex: `--foo` or `-bar`).
    /// The leading dashes are significant: `--foo` and `-foo` are different keys.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            aliases: Vec::default(),
            validator: Validator::always(),
            mandatory: true,
            help: String::default(),
        }
    }

    /// Add an alternate key which resolves to this option.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Replace the alternate keys of this option.
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the acceptance predicate of the option value.
    /// If repeated, only the final validator applies.
    pub fn validator(mut self, validator: impl Into<Validator>) -> Self {
        self.validator = validator.into();
        self
    }

    /// Require the option to be present on the command line.
    pub fn mandatory(self) -> Self {
        self.requirement(true)
    }

    /// Allow the option to be omitted from the command line.
    pub fn optional(self) -> Self {
        self.requirement(false)
    }

    /// Set whether the option must be present on the command line.
    pub fn requirement(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Document the option for the help listing.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help = description.into();
        self
    }

    /// The canonical key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The alternate keys, in declaration order.
    pub fn aliases_list(&self) -> &[String] {
        &self.aliases
    }

    /// The help description (empty when undocumented).
    pub fn description(&self) -> &str {
        &self.help
    }

    /// Whether the option must be present on the command line.
    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// Apply the validator to an option value.
    pub fn validate(&self, value: Option<&str>) -> bool {
        self.validator.test(value)
    }

    /// The canonical key followed by the aliases.
    pub fn all_keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.key.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Whether `predicate` holds for the canonical key or any alias.
    pub fn is_match(&self, predicate: impl Fn(&str) -> bool) -> bool {
        self.all_keys().any(predicate)
    }

    /// Describe the option for a human, ex: `` `--foo` [-f, -x] ``.
    pub fn to_human_description(&self) -> String {
        if self.aliases.is_empty() {
            format!("`{}`", self.key)
        } else {
            format!("`{}` {}", self.key, self.aliases_display())
        }
    }

    pub(crate) fn aliases_display(&self) -> String {
        if self.aliases.is_empty() {
            String::default()
        } else {
            format!("[{}]", self.aliases.join(", "))
        }
    }

    fn help_spec() -> Self {
        ArgSpec::new(HELP_KEY)
            .alias(HELP_ALIAS)
            .validator(Validator::absent())
            .help(HELP_MESSAGE)
            .optional()
    }
}

/// The ordered collection of recognized options.
///
/// Build with [`CommandLineSpec::new`], which also declares the `--help [-h]` option, or [`CommandLineSpec::without_help`].
/// By default, options which are not declared are rejected; see [`CommandLineSpec::allow_arbitrary_options`].
///
/// ### Example
/// ```
/// # use flagspec_builder as flagspec;
/// use flagspec::{ArgSpec, CommandLineSpec};
///
/// let spec = CommandLineSpec::new([
///     ArgSpec::new("--foo").alias("-f"),
///     ArgSpec::new("--bar").optional(),
/// ]);
///
/// assert_eq!(spec.get("-f").unwrap().key(), "--foo");
/// assert!(spec.get("--baz").is_none());
/// assert!(spec.is_exposed_key("foo"));
/// assert!(spec.is_help_enabled());
/// assert_eq!(spec.mandatory_arg_specs().count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CommandLineSpec {
    specs: Vec<ArgSpec>,
    index: HashMap<String, usize>,
    exposed_keys: HashSet<String>,
    allow_arbitrary_options: bool,
}

impl CommandLineSpec {
    /// Create the spec from `specs`, adding the `--help [-h]` option.
    ///
    /// Panics when the declaration is invalid (see [`CommandLineSpec::try_new`]).
    pub fn new(specs: impl IntoIterator<Item = ArgSpec>) -> Self {
        Self::try_new(specs).unwrap_or_else(|error| panic!("{error}"))
    }

    /// Create the spec from `specs`, adding the `--help [-h]` option.
    ///
    /// Fails when a key or alias does not start with `-`, or when two keys are equal once their leading dashes are stripped (ex: `--foo` and `-foo`).
    pub fn try_new(specs: impl IntoIterator<Item = ArgSpec>) -> Result<Self, ConfigError> {
        let mut specs: Vec<ArgSpec> = specs.into_iter().collect();
        specs.push(ArgSpec::help_spec());
        Self::build(specs)
    }

    /// Create the spec from `specs` only.
    ///
    /// Panics when the declaration is invalid (see [`CommandLineSpec::try_new`]).
    pub fn without_help(specs: impl IntoIterator<Item = ArgSpec>) -> Self {
        Self::try_without_help(specs).unwrap_or_else(|error| panic!("{error}"))
    }

    /// Create the spec from `specs` only.
    pub fn try_without_help(
        specs: impl IntoIterator<Item = ArgSpec>,
    ) -> Result<Self, ConfigError> {
        Self::build(specs.into_iter().collect())
    }

    /// The spec declaring only the `--help [-h]` option.
    pub fn empty() -> Self {
        Self::new(Vec::default())
    }

    /// The spec declaring only the `--help [-h]` option, and accepting any other option.
    pub fn allow_all() -> Self {
        Self::empty().allow_arbitrary_options(true)
    }

    fn build(specs: Vec<ArgSpec>) -> Result<Self, ConfigError> {
        let mut index = HashMap::default();
        let mut exposed_keys = HashSet::default();
        let mut duplicates = Vec::default();

        for (i, spec) in specs.iter().enumerate() {
            for key in spec.all_keys() {
                if !is_option(key) {
                    return Err(ConfigError(format!(
                        "Key must be an option, e.g. `--foo` or `-bar`: '{key}'."
                    )));
                }

                if !exposed_keys.insert(to_exposed_key(key).to_string()) {
                    duplicates.push(key.to_string());
                }

                index.insert(key.to_string(), i);
            }
        }

        if !duplicates.is_empty() {
            return Err(ConfigError(format!(
                "Duplicate command line keys found: [{}].",
                duplicates.join(", ")
            )));
        }

        Ok(Self {
            specs,
            index,
            exposed_keys,
            allow_arbitrary_options: false,
        })
    }

    /// Set whether options which are not declared are accepted (without validation).
    pub fn allow_arbitrary_options(mut self, allow: bool) -> Self {
        self.allow_arbitrary_options = allow;
        self
    }

    /// Whether options which are not declared are accepted.
    pub fn is_allow_arbitrary_options(&self) -> bool {
        self.allow_arbitrary_options
    }

    /// Resolve a canonical key or alias to its declaration.
    pub fn get(&self, key: &str) -> Option<&ArgSpec> {
        self.index.get(key).map(|i| &self.specs[*i])
    }

    /// All declarations, in declaration order.
    pub fn all_arg_specs(&self) -> &[ArgSpec] {
        &self.specs
    }

    /// The mandatory declarations, in declaration order.
    pub fn mandatory_arg_specs(&self) -> impl Iterator<Item = &ArgSpec> {
        self.specs.iter().filter(|spec| spec.is_mandatory())
    }

    /// Whether any declared key or alias equals `exposed_key` once its leading dashes are stripped.
    pub fn is_exposed_key(&self, exposed_key: &str) -> bool {
        self.exposed_keys.contains(exposed_key)
    }

    /// Whether the `help` option is declared.
    pub fn is_help_enabled(&self) -> bool {
        self.is_exposed_key(HELP_EXPOSED)
    }
}

impl Default for CommandLineSpec {
    fn default() -> Self {
        Self::empty()
    }
}
