//! Traits which, typically, may be imported without concern: `use flagspec::prelude::*`.
use std::env;

use crate::api::{report_errors, ArgSpec, CommandLine, CommandLineOptions, CommandLineSpec};
use crate::model::Validator;
use crate::parser::{ConsoleInterface, InvalidCommandLine};

/// Behaviour for a type to be read from an option value.
// Needs to be imported in order to implement a custom `FlagValue`.
pub trait FlagValue: Sized + Clone + Send + Sync + 'static {
    /// The validator a [`Flag`](crate::Flag) of this type starts out with.
    fn default_validator() -> Validator;

    /// Convert the option value; `""` for the value-less form of the option.
    fn from_value(value: &str) -> Option<Self>;

    /// Render as an option value.
    fn to_value(&self) -> String;

    /// The default of a [`Flag`](crate::Flag) of this type, when none is configured.
    fn implicit_default() -> Option<Self> {
        None
    }
}

/// Behaviour for a collection of flags to be declared and read together.
///
/// Typically implemented via `#[derive(Flags)]`.
// Needs to be imported in order to parse a `FlagSet`.
pub trait FlagSet: Sized {
    /// The specs of every flag in the set.
    fn arg_specs() -> Vec<ArgSpec>;

    /// Read every flag from parsed options.
    fn from_options(options: &CommandLineOptions) -> Result<Self, InvalidCommandLine>;

    /// The spec of the set, including the `--help [-h]` option.
    fn command_line_spec() -> CommandLineSpec {
        CommandLineSpec::new(Self::arg_specs())
    }

    /// Parse the command line `tokens` into the set.
    ///
    /// Returns the exit code the program should terminate with when it should not go on, as [`CommandLineInit::parse_tokens`](crate::CommandLineInit::parse_tokens).
    fn parse_tokens(tokens: &[&str]) -> Result<Self, i32> {
        let command_line = CommandLine::of(Self::command_line_spec()).parse_tokens(tokens)?;
        Self::from_options(command_line.options())
            .map_err(|error| report_errors(&error, &ConsoleInterface::default()))
    }

    /// Parse the command line arguments of the current process into the set.
    ///
    /// On help or error, exits the process (via [`std::process::exit`]).
    fn parse() -> Self {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match Self::parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(flags) => flags,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}
