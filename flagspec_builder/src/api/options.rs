use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

/// The positional (non-option) arguments of a command line, in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLineArgs {
    args: Vec<String>,
}

impl CommandLineArgs {
    pub(crate) fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// The number of positional arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Whether there are no positional arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// The positional argument at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Iterate the positional arguments.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(String::as_str)
    }

    /// The positional arguments as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }
}

impl std::ops::Index<usize> for CommandLineArgs {
    type Output = str;

    /// Panics when `index` is out of range.
    fn index(&self, index: usize) -> &Self::Output {
        &self.args[index]
    }
}

/// A typed read of an option value failed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert option '{name}' value '{value}' to {type_name}.")]
pub struct InvalidConversion {
    name: String,
    value: String,
    type_name: &'static str,
}

/// The resolved options of a command line.
///
/// Options are available through two lookups:
/// * by *name*: the canonical key with its leading dashes stripped (ex: `foo` for `--foo` or its alias `-f`).
/// Options which are not declared use their own key as typed (ex: `qux` for `-qux`).
/// * by *key*: any declared spelling, including the dashes (ex: `--foo` and `-f`).
///
/// ### Example
/// ```
/// # use flagspec_builder as flagspec;
/// use flagspec::{ArgSpec, CommandLineParser, CommandLineSpec};
///
/// let spec = CommandLineSpec::new([ArgSpec::new("--port").alias("-p")]);
/// let result = CommandLineParser::parse(&["-p=8080"], &spec).unwrap();
/// let options = result.options();
///
/// assert_eq!(options.get("port"), Some("8080"));
/// assert_eq!(options.get_by_key("--port"), Some("8080"));
/// assert_eq!(options.get_by_key("-p"), Some("8080"));
/// assert_eq!(options.get_as::<u16>("port"), Ok(Some(8080)));
/// assert_eq!(options.get_or("host", "localhost"), "localhost");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLineOptions {
    main: BTreeMap<String, String>,
    keys: BTreeMap<String, String>,
}

impl CommandLineOptions {
    pub(crate) fn new(main: BTreeMap<String, String>, keys: BTreeMap<String, String>) -> Self {
        Self { main, keys }
    }

    /// The number of distinct options.
    pub fn len(&self) -> usize {
        self.main.len()
    }

    /// Whether no options were supplied.
    pub fn is_empty(&self) -> bool {
        self.main.is_empty()
    }

    /// The value of the option by its name (ex: `foo`).
    /// Options supplied without `=` have the empty value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.main.get(name).map(String::as_str)
    }

    /// The value of the option by its name, or `default` when not supplied.
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Convert the value of the option by its name via [`std::str::FromStr`].
    ///
    /// Returns `Ok(None)` when the option was not supplied.
    pub fn get_as<T: FromStr>(&self, name: &str) -> Result<Option<T>, InvalidConversion> {
        match self.get(name) {
            Some(value) => T::from_str(value).map(Some).map_err(|_| InvalidConversion {
                name: name.to_string(),
                value: value.to_string(),
                type_name: std::any::type_name::<T>(),
            }),
            None => Ok(None),
        }
    }

    /// Whether the option was supplied, by its name.
    pub fn contains(&self, name: &str) -> bool {
        self.main.contains_key(name)
    }

    /// The value of the option by any of its keys (ex: `--foo` or `-f`).
    pub fn get_by_key(&self, key: &str) -> Option<&str> {
        self.keys.get(key).map(String::as_str)
    }

    /// Whether the option was supplied, by any of its keys.
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// The names of the supplied options, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.main.keys().map(String::as_str)
    }

    /// Every key under which a supplied option may be looked up, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }

    /// The name to value mapping.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.main
    }

    /// The key to value mapping.
    pub fn all_keys_map(&self) -> &BTreeMap<String, String> {
        &self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn options(main: &[(&str, &str)], keys: &[(&str, &str)]) -> CommandLineOptions {
        CommandLineOptions::new(
            main.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            keys.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn args() {
        // Setup
        let args = CommandLineArgs::new(vec!["a".to_string(), "b".to_string(), "a".to_string()]);

        // Execute & verify
        assert_eq!(args.len(), 3);
        assert!(!args.is_empty());
        assert_eq!(args.get(0), Some("a"));
        assert_eq!(args.get(3), None);
        assert_eq!(&args[1], "b");
        assert_eq!(args.iter().collect::<Vec<_>>(), vec!["a", "b", "a"]);
        assert!(CommandLineArgs::default().is_empty());
    }

    #[test]
    #[should_panic]
    fn args_out_of_range() {
        let args = CommandLineArgs::new(vec!["a".to_string()]);
        let _ = &args[1];
    }

    #[test]
    fn options_lookup() {
        // Setup
        let options = options(
            &[("foo", "1"), ("qux", "")],
            &[("--foo", "1"), ("-f", "1"), ("-qux", "")],
        );

        // Execute & verify
        assert_eq!(options.len(), 2);
        assert!(!options.is_empty());
        assert_eq!(options.get("foo"), Some("1"));
        assert_eq!(options.get("qux"), Some(""));
        assert_eq!(options.get("--foo"), None);
        assert_eq!(options.get_or("foo", "x"), "1");
        assert_eq!(options.get_or("bar", "x"), "x");
        assert!(options.contains("qux"));
        assert!(!options.contains("-qux"));
        assert_eq!(options.get_by_key("-f"), Some("1"));
        assert_eq!(options.get_by_key("f"), None);
        assert!(options.contains_key("-qux"));
        assert_eq!(options.names().collect::<Vec<_>>(), vec!["foo", "qux"]);
        assert_eq!(options.keys().collect::<Vec<_>>(), vec!["--foo", "-f", "-qux"]);
    }

    #[rstest]
    #[case("1", Ok(Some(1)))]
    #[case("-7", Ok(Some(-7)))]
    fn options_get_as(#[case] value: &str, #[case] expected: Result<Option<i32>, ()>) {
        // Setup
        let options = options(&[("foo", value)], &[("--foo", value)]);

        // Execute
        let actual = options.get_as::<i32>("foo").map_err(|_| ());

        // Verify
        assert_eq!(actual, expected);
        assert_eq!(options.get_as::<i32>("bar"), Ok(None));
    }

    #[test]
    fn options_get_as_invalid() {
        // Setup
        let options = options(&[("foo", "abc")], &[("--foo", "abc")]);

        // Execute
        let error = options.get_as::<u8>("foo").unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "cannot convert option 'foo' value 'abc' to u8.");
    }
}
