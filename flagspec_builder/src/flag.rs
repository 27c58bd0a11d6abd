mod value;

use crate::api::{ArgSpec, CommandLineOptions};
use crate::model::Validator;
use crate::parser::OptionError;
use crate::prelude::FlagValue;

#[cfg(feature = "tracing_debug")]
use tracing::{info, warn};

/// A typed option.
///
/// A flag is mandatory unless it has a default value (`bool` flags default to `false`).
/// The validator starts out as the [`FlagValue::default_validator`] of the type, and is narrowed by the builder methods.
///
/// ### Example
/// ```
/// # use flagspec_builder as flagspec;
/// use flagspec::{CommandLineParser, CommandLineSpec, Flag};
///
/// let port: Flag<u16> = Flag::new("--port").alias("-p").default_value(8080).min(1024);
/// let verbose: Flag<bool> = Flag::new("--verbose").alias("-v");
/// let spec = CommandLineSpec::new([port.to_arg_spec(), verbose.to_arg_spec()]);
///
/// let result = CommandLineParser::parse(&["-v", "--port=9000"], &spec).unwrap();
/// assert_eq!(port.get(result.options()), Some(9000));
/// assert_eq!(verbose.get(result.options()), Some(true));
///
/// let result = CommandLineParser::parse(&["-v=false"], &spec).unwrap();
/// assert_eq!(port.get(result.options()), Some(8080));
/// assert_eq!(verbose.get(result.options()), Some(false));
///
/// let error = CommandLineParser::parse(&["--port=80"], &spec).unwrap_err();
/// assert_eq!(error.to_string(), "Option `--port` value is invalid: `80`");
/// ```
#[derive(Debug, Clone)]
pub struct Flag<T: FlagValue> {
    key: String,
    aliases: Vec<String>,
    help: String,
    default: Option<T>,
    mandatory: Option<bool>,
    validator: Validator,
}

impl<T: FlagValue> Flag<T> {
    /// Create a flag for the canonical `key` (ex: `--port`).
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            aliases: Vec::default(),
            help: String::default(),
            default: T::implicit_default(),
            mandatory: None,
            validator: T::default_validator(),
        }
    }

    /// Add an alternate key (ex: `-p`).
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Document the flag for the help listing.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help = description.into();
        self
    }

    /// The value of the flag when it is not supplied.
    /// Unless marked [`Flag::mandatory`], this makes the flag optional.
    pub fn default_value(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// Require the flag on the command line, even when it has a default value.
    pub fn mandatory(mut self) -> Self {
        self.mandatory = Some(true);
        self
    }

    /// Do not require the flag on the command line, even without a default value.
    pub fn optional(mut self) -> Self {
        self.mandatory = Some(false);
        self
    }

    /// Replace the validator.
    pub fn validator(mut self, validator: impl Into<Validator>) -> Self {
        self.validator = validator.into();
        self
    }

    /// Accept every value, including values which cannot be converted.
    /// Unconvertible values read as the default value.
    pub fn without_validation(self) -> Self {
        self.validator(Validator::always())
    }

    /// Additionally require the converted value to satisfy `predicate`.
    pub fn matching(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        let typed = Validator::new(move |value| {
            T::from_value(value.unwrap_or_default()).map_or(false, |v| predicate(&v))
        });
        self.validator = self.validator.and(typed);
        self
    }

    /// The canonical key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the flag must be present on the command line.
    pub fn is_mandatory(&self) -> bool {
        self.mandatory.unwrap_or(self.default.is_none())
    }

    /// The value of the flag when it is not supplied.
    pub fn default(&self) -> Option<&T> {
        self.default.as_ref()
    }

    /// The spec to declare the flag with in a [`CommandLineSpec`](crate::CommandLineSpec).
    pub fn to_arg_spec(&self) -> ArgSpec {
        if let Some(default) = &self.default {
            if !self.validator.test(Some(default.to_value().as_str())) {
                #[cfg(feature = "tracing_debug")]
                {
                    if self.is_mandatory() {
                        info!(
                            "Flag `{}` is mandatory, but its default value `{}` is invalid.",
                            self.key,
                            default.to_value()
                        );
                    } else {
                        warn!(
                            "Flag `{}` is optional, but its default value `{}` is invalid.",
                            self.key,
                            default.to_value()
                        );
                    }
                }
            }
        }

        ArgSpec::new(self.key.clone())
            .aliases(self.aliases.iter().cloned())
            .validator(self.validator.clone())
            .requirement(self.is_mandatory())
            .help(self.help.clone())
    }

    /// The raw value supplied under any of the keys of the flag.
    pub fn provided_value<'a>(&self, options: &'a CommandLineOptions) -> Option<&'a str> {
        options.get_by_key(&self.key)
    }

    /// The value of the flag: the supplied value converted, or else the default value.
    pub fn get(&self, options: &CommandLineOptions) -> Option<T> {
        self.provided_value(options)
            .and_then(T::from_value)
            .or_else(|| self.default.clone())
    }

    /// The value of the flag, reporting why there is none.
    pub fn require(&self, options: &CommandLineOptions) -> Result<T, OptionError> {
        match self.get(options) {
            Some(value) => Ok(value),
            None => match self.provided_value(options) {
                Some(value) => Err(OptionError::InvalidValue {
                    key: self.key.clone(),
                    value: value.to_string(),
                }),
                None => Err(OptionError::MandatoryMissing(
                    self.to_arg_spec().to_human_description(),
                )),
            },
        }
    }
}

impl<T: FlagValue + PartialOrd> Flag<T> {
    /// Additionally require the value to be at least `minimum`.
    pub fn min(self, minimum: T) -> Self {
        self.matching(move |v| *v >= minimum)
    }

    /// Additionally require the value to be at most `maximum`.
    pub fn max(self, maximum: T) -> Self {
        self.matching(move |v| *v <= maximum)
    }

    /// Additionally require the value to be within `minimum..=maximum`.
    pub fn in_range(self, minimum: T, maximum: T) -> Self {
        self.matching(move |v| minimum <= *v && *v <= maximum)
    }

    /// Additionally require the value to be one of `values`.
    pub fn whitelist(self, values: impl IntoIterator<Item = T>) -> Self {
        let values: Vec<T> = values.into_iter().collect();
        self.matching(move |v| values.contains(v))
    }

    /// Additionally require the value to be none of `values`.
    pub fn blacklist(self, values: impl IntoIterator<Item = T>) -> Self {
        let values: Vec<T> = values.into_iter().collect();
        self.matching(move |v| !values.contains(v))
    }
}

impl Flag<String> {
    /// Additionally require the value to be non-empty.
    pub fn not_empty(self) -> Self {
        self.matching(|v| !v.is_empty())
    }

    /// Additionally require the length of the value to be within `minimum..=maximum`.
    pub fn length(self, minimum: usize, maximum: usize) -> Self {
        self.matching(move |v| (minimum..=maximum).contains(&v.chars().count()))
    }
}
