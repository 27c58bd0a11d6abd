pub(crate) const OPTION_PREFIX: char = '-';
pub(crate) const VALUE_SEPARATOR: char = '=';

pub(crate) const HELP_KEY: &str = "--help";
pub(crate) const HELP_ALIAS: &str = "-h";
pub(crate) const HELP_EXPOSED: &str = "help";
pub(crate) const HELP_MESSAGE: &str = "Prints help";

pub(crate) const NO_DOC: &str = "<No doc provided>";
pub(crate) const MANDATORY: &str = "mandatory";
pub(crate) const OPTIONAL: &str = "optional";

pub(crate) const ARGUMENTS_ERROR: &str = "Command-line arguments error";
