use std::env;

use crate::api::{CommandLineArgs, CommandLineOptions, CommandLineSpec};
use crate::constant::*;
use crate::parser::{
    CommandLineParser, ConsoleInterface, InvalidCommandLine, Printer, UserInterface,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A successfully parsed command line.
///
/// ### Example
/// ```
/// # use flagspec_builder as flagspec;
/// use flagspec::{ArgSpec, CommandLine, CommandLineSpec};
///
/// let command_line = CommandLine::of(CommandLineSpec::new([ArgSpec::new("--name").optional()]))
///     .parse_tokens(&["--name=world", "a.txt"])
///     .unwrap();
///
/// assert_eq!(command_line.original_args(), &["--name=world", "a.txt"]);
/// assert_eq!(command_line.args().get(0), Some("a.txt"));
/// assert_eq!(command_line.options().get_or("name", "nobody"), "world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    original_args: Vec<String>,
    args: CommandLineArgs,
    options: CommandLineOptions,
}

impl CommandLine {
    /// Prepare to parse a command line against `spec`.
    pub fn of(spec: CommandLineSpec) -> CommandLineInit {
        CommandLineInit {
            spec,
            process_help: true,
        }
    }

    /// Prepare to parse a command line which accepts any option (other than a misspelt `--help`).
    pub fn allow_all() -> CommandLineInit {
        Self::of(CommandLineSpec::allow_all())
    }

    /// The tokens as they were supplied.
    pub fn original_args(&self) -> &[String] {
        &self.original_args
    }

    /// The positional arguments.
    pub fn args(&self) -> &CommandLineArgs {
        &self.args
    }

    /// The resolved options.
    pub fn options(&self) -> &CommandLineOptions {
        &self.options
    }
}

/// The process facing parser of a [`CommandLineSpec`].
///
/// Adds help handling, error reporting, and exit codes to [`CommandLineParser`].
#[derive(Debug, Clone)]
pub struct CommandLineInit {
    spec: CommandLineSpec,
    process_help: bool,
}

impl CommandLineInit {
    /// Whether a lone `--help` (or `-h`) prints the help listing instead of parsing (default `true`).
    pub fn process_help(mut self, process_help: bool) -> Self {
        self.process_help = process_help;
        self
    }

    /// Parse the command line `tokens`, without help handling or printing.
    pub fn try_parse_tokens(&self, tokens: &[&str]) -> Result<CommandLine, InvalidCommandLine> {
        let (args, options) = CommandLineParser::parse(tokens, &self.spec)?.into_parts();
        Ok(CommandLine {
            original_args: tokens.iter().map(|token| token.to_string()).collect(),
            args,
            options,
        })
    }

    /// Parse the command line `tokens`.
    ///
    /// Returns the exit code the program should terminate with when it should not go on:
    /// `0` after printing the help listing, `1` after printing the command line errors.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<CommandLine, i32> {
        self.parse_tokens_with(tokens, &ConsoleInterface::default())
    }

    /// Parse the command line arguments of the current process (excluding the program name).
    ///
    /// On help or error, exits the process (via [`std::process::exit`]) with the code from [`CommandLineInit::parse_tokens`].
    pub fn parse(&self) -> CommandLine {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(command_line) => command_line,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Parse the command line `tokens` as [`CommandLineInit::parse_tokens`], capturing what would be printed instead.
    /// Returns the outcome, the printed message (ex: the help listing), and the printed error.
    ///
    /// ### Example
    /// ```
    /// # use flagspec_builder as flagspec;
    /// use flagspec::{ArgSpec, CommandLine, CommandLineSpec};
    ///
    /// let init = CommandLine::of(CommandLineSpec::new([ArgSpec::new("--foo")]));
    /// let (result, message, error) = init.parse_tokens_captured(&[]);
    ///
    /// assert_eq!(result, Err(1));
    /// assert_eq!(message, None);
    /// assert_eq!(
    ///     error.as_deref(),
    ///     Some("Command-line arguments error\nMandatory option is missing: `--foo`")
    /// );
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn parse_tokens_captured(
        &self,
        tokens: &[&str],
    ) -> (Result<CommandLine, i32>, Option<String>, Option<String>) {
        let user_interface = crate::parser::util::InMemoryInterface::default();
        let result = self.parse_tokens_with(tokens, &user_interface);
        let (message, error) = user_interface.consume();
        (result, message, error)
    }

    pub(crate) fn parse_tokens_with(
        &self,
        tokens: &[&str],
        user_interface: &dyn UserInterface,
    ) -> Result<CommandLine, i32> {
        if self.is_help_request(tokens) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Help requested: {tokens:?}.");
            }

            Printer::terminal(&self.spec).print_help(user_interface);
            return Err(0);
        }

        self.try_parse_tokens(tokens)
            .map_err(|error| report_errors(&error, user_interface))
    }

    fn is_help_request(&self, tokens: &[&str]) -> bool {
        self.process_help
            && self.spec.is_help_enabled()
            && matches!(tokens, [token] if *token == HELP_KEY || *token == HELP_ALIAS)
    }
}

/// Print the errors, sorted, under a heading.
/// Returns the exit code for a rejected command line.
pub(crate) fn report_errors(error: &InvalidCommandLine, user_interface: &dyn UserInterface) -> i32 {
    let mut messages: Vec<String> = error.errors().iter().map(ToString::to_string).collect();
    messages.sort();
    #[cfg(feature = "tracing_debug")]
    {
        debug!("Command line rejected with {} error(s).", messages.len());
    }

    user_interface.print_error(format!("{ARGUMENTS_ERROR}\n{}", messages.join("\n")));
    1
}
