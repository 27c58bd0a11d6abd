use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::api::{ArgSpec, CommandLineArgs, CommandLineOptions, CommandLineSpec};
use crate::constant::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A defect in the declaration of a [`CommandLineSpec`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// A single problem found in the command line options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// The validator of a declared option rejected its value.
    #[error("Option `{key}` value is invalid: `{value}`")]
    InvalidValue {
        /// The key as it appeared on the command line.
        key: String,
        /// The value as it appeared on the command line (empty when absent).
        value: String,
    },

    /// An option is not declared, and arbitrary options are disallowed.
    #[error("Unrecognized option: {0}")]
    Unrecognized(String),

    /// A mandatory option was not supplied under any of its keys.
    #[error("Mandatory option is missing: {0}")]
    MandatoryMissing(String),

    /// An option is not declared, but matches a declared key under a different dash convention.
    #[error("Option misspelt: `{0}`")]
    Misspelt(String),
}

/// The command line failed validation.
///
/// Carries every problem found, in the order they were discovered (never empty).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", join_messages(.errors, ", "))]
pub struct InvalidCommandLine {
    errors: Vec<OptionError>,
}

impl InvalidCommandLine {
    pub(crate) fn assure_no_errors(errors: Vec<OptionError>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self { errors })
        }
    }

    /// The individual problems, in discovery order.
    pub fn errors(&self) -> &[OptionError] {
        &self.errors
    }

    /// Consume into the individual problems.
    pub fn into_errors(self) -> Vec<OptionError> {
        self.errors
    }
}

impl From<OptionError> for InvalidCommandLine {
    fn from(error: OptionError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

fn join_messages(errors: &[OptionError], separator: &str) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// The outcome of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    args: CommandLineArgs,
    options: CommandLineOptions,
}

impl ParseResult {
    /// The positional arguments.
    pub fn args(&self) -> &CommandLineArgs {
        &self.args
    }

    /// The resolved options.
    pub fn options(&self) -> &CommandLineOptions {
        &self.options
    }

    /// Consume into the positional arguments and resolved options.
    pub fn into_parts(self) -> (CommandLineArgs, CommandLineOptions) {
        (self.args, self.options)
    }
}

/// The stateless command line parser.
///
/// ### Example
/// ```
/// # use flagspec_builder as flagspec;
/// use flagspec::{ArgSpec, CommandLineParser, CommandLineSpec};
///
/// let spec = CommandLineSpec::new([ArgSpec::new("--foo").alias("-f")]);
/// let result = CommandLineParser::parse(&["-f=1", "input.txt"], &spec).unwrap();
///
/// assert_eq!(result.args().as_slice(), &["input.txt"]);
/// assert_eq!(result.options().get("foo"), Some("1"));
/// assert_eq!(result.options().get_by_key("--foo"), Some("1"));
///
/// let error = CommandLineParser::parse(&["--bar"], &spec).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "Unrecognized option: --bar, Mandatory option is missing: `--foo` [-f]"
/// );
/// ```
pub struct CommandLineParser;

impl CommandLineParser {
    /// Parse the command line `tokens` against `spec`.
    ///
    /// Tokens starting with `-` are options (`--key` or `--key=value`), all other tokens are positional arguments.
    /// Every option is validated, and every problem is reported in the returned [`InvalidCommandLine`].
    /// When the same key appears more than once, the last occurrence wins.
    pub fn parse<S: AsRef<str>>(
        tokens: &[S],
        spec: &CommandLineSpec,
    ) -> Result<ParseResult, InvalidCommandLine> {
        // 1. Partition into positional arguments and options.
        let (options, args): (Vec<&str>, Vec<&str>) = tokens
            .iter()
            .map(|token| token.as_ref())
            .partition(|token| is_option(token));

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Partitioned {} args and {} options.", args.len(), options.len());
        }

        // 2. Split the options into key & value, and 3. join them with their declarations.
        let mapped_options = map_options(options.into_iter().map(ParsedOption::parse), spec);

        // 4. Validate all the options.
        let errors = validate_options(spec, &mapped_options);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Validation found {} errors.", errors.len());
        }

        // 5. Report all the errors.
        InvalidCommandLine::assure_no_errors(errors)?;

        // 6. Build the final result.
        let mut main = BTreeMap::default();
        let mut keys = BTreeMap::default();

        for option in mapped_options.values() {
            main.insert(option.exposed_key().to_string(), option.value().to_string());

            for key in option.all_keys() {
                keys.insert(key.to_string(), option.value().to_string());
            }
        }

        Ok(ParseResult {
            args: CommandLineArgs::new(args.into_iter().map(String::from).collect()),
            options: CommandLineOptions::new(main, keys),
        })
    }
}

/// Options keyed by the parsed key, iterable in order of first appearance.
struct MappedOptions<'a> {
    order: Vec<MappedOption<'a>>,
    index: HashMap<&'a str, usize>,
}

impl<'a> MappedOptions<'a> {
    fn values(&self) -> impl Iterator<Item = &MappedOption<'a>> {
        self.order.iter()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }
}

fn map_options<'a>(
    parsed: impl Iterator<Item = ParsedOption<'a>>,
    spec: &'a CommandLineSpec,
) -> MappedOptions<'a> {
    let mut order: Vec<MappedOption<'a>> = Vec::default();
    let mut index: HashMap<&'a str, usize> = HashMap::default();

    for option in parsed {
        let mapped = MappedOption {
            spec: spec.get(option.key),
            parsed: option,
        };

        match index.get(mapped.parsed.key) {
            Some(i) => {
                // Last write wins.
                order[*i] = mapped;
            }
            None => {
                index.insert(mapped.parsed.key, order.len());
                order.push(mapped);
            }
        }
    }

    MappedOptions { order, index }
}

fn validate_options(spec: &CommandLineSpec, options: &MappedOptions) -> Vec<OptionError> {
    let mut errors = Vec::default();

    errors.extend(
        options
            .values()
            .filter(|option| option.has_spec() && !option.validate())
            .map(|option| OptionError::InvalidValue {
                key: option.parsed.key.to_string(),
                value: option.value().to_string(),
            }),
    );

    if !spec.is_allow_arbitrary_options() {
        errors.extend(
            options
                .values()
                .filter(|option| !option.has_spec())
                .map(|option| OptionError::Unrecognized(option.parsed.key.to_string())),
        );
    }

    errors.extend(
        spec.mandatory_arg_specs()
            .filter(|arg_spec| !arg_spec.is_match(|key| options.contains_key(key)))
            .map(|arg_spec| OptionError::MandatoryMissing(arg_spec.to_human_description())),
    );

    errors.extend(
        options
            .values()
            .filter(|option| !option.has_spec())
            .filter(|option| spec.is_exposed_key(option.exposed_key()))
            .map(|option| OptionError::Misspelt(option.key().to_string())),
    );

    errors
}

pub(crate) fn is_option(token: &str) -> bool {
    token.starts_with(OPTION_PREFIX)
}

pub(crate) fn to_exposed_key(key: &str) -> &str {
    key.trim_start_matches(OPTION_PREFIX)
}

#[derive(Debug, PartialEq, Eq)]
struct ParsedOption<'a> {
    key: &'a str,
    value: Option<&'a str>,
}

impl<'a> ParsedOption<'a> {
    fn parse(raw: &'a str) -> Self {
        debug_assert!(is_option(raw), "internal error - must be an option: {raw}");
        let (key, value) = match raw.split_once(VALUE_SEPARATOR) {
            Some((key, value)) => (key, Some(value)),
            None => (raw, None),
        };

        Self { key, value }
    }
}

#[derive(Debug)]
struct MappedOption<'a> {
    parsed: ParsedOption<'a>,
    spec: Option<&'a ArgSpec>,
}

impl<'a> MappedOption<'a> {
    fn has_spec(&self) -> bool {
        self.spec.is_some()
    }

    fn validate(&self) -> bool {
        match self.spec {
            Some(spec) => spec.validate(self.parsed.value),
            None => false,
        }
    }

    fn all_keys(&self) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self.spec {
            Some(spec) => Box::new(spec.all_keys()),
            None => Box::new(std::iter::once(self.parsed.key)),
        }
    }

    fn key(&self) -> &'a str {
        match self.spec {
            Some(spec) => spec.key(),
            None => self.parsed.key,
        }
    }

    fn exposed_key(&self) -> &'a str {
        to_exposed_key(self.key())
    }

    fn value(&self) -> &'a str {
        self.parsed.value.unwrap_or_default()
    }
}
