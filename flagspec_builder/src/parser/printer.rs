use terminal_size::{terminal_size, Width};

use crate::api::{ArgSpec, CommandLineSpec};
use crate::constant::*;
use crate::parser::interface::UserInterface;
use crate::parser::{ColumnRenderer, TotalWidth};

#[derive(Debug, PartialEq, Eq)]
struct HelpRow {
    keys: String,
    requirement: &'static str,
    description: String,
}

impl From<&ArgSpec> for HelpRow {
    fn from(spec: &ArgSpec) -> Self {
        let description = if spec.description().is_empty() {
            NO_DOC.to_string()
        } else {
            spec.description().to_string()
        };

        Self {
            keys: format!("{} {}", spec.key(), spec.aliases_display()),
            requirement: if spec.is_mandatory() {
                MANDATORY
            } else {
                OPTIONAL
            },
            description,
        }
    }
}

/// Renders the help listing of a [`CommandLineSpec`]: one row per option, sorted by key.
pub(crate) struct Printer {
    rows: Vec<HelpRow>,
    terminal_width: Option<usize>,
}

impl Printer {
    /// Produce a printer which wraps to the width of the current terminal (if any).
    pub(crate) fn terminal(spec: &CommandLineSpec) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(spec, terminal_width)
    }

    pub(crate) fn new(spec: &CommandLineSpec, terminal_width: Option<usize>) -> Self {
        let mut rows: Vec<HelpRow> = spec.all_arg_specs().iter().map(HelpRow::from).collect();
        rows.sort_by(|a, b| a.keys.cmp(&b.keys));
        Self {
            rows,
            terminal_width,
        }
    }

    pub(crate) fn render(&self) -> String {
        let keys_width = self
            .rows
            .iter()
            .map(|row| row.keys.chars().count())
            .max()
            .unwrap_or(0);
        let requirement_width = self
            .rows
            .iter()
            .map(|row| row.requirement.len())
            .max()
            .unwrap_or(0);
        let description_width = self
            .rows
            .iter()
            .map(|row| row.description.chars().count())
            .max()
            .unwrap_or(0);
        let fixed = vec![keys_width, requirement_width];

        let renderer = match self.terminal_width {
            Some(total_width) => {
                ColumnRenderer::guided(fixed, description_width, TotalWidth(total_width))
            }
            None => ColumnRenderer::new(fixed, description_width),
        };

        self.rows
            .iter()
            .flat_map(|row| {
                renderer.render(&[row.keys.as_str(), row.requirement], &row.description)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn print_help(&self, user_interface: &(impl UserInterface + ?Sized)) {
        user_interface.print(self.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::InMemoryInterface;

    #[test]
    fn print_help_empty() {
        // Setup
        let spec = CommandLineSpec::without_help(Vec::default());
        let printer = Printer::new(&spec, None);
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help(&interface);

        // Verify
        assert_eq!(interface.consume_message(), "");
    }

    #[test]
    fn print_help_default() {
        // Setup
        let spec = CommandLineSpec::empty();
        let printer = Printer::new(&spec, None);
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help(&interface);

        // Verify
        assert_eq!(interface.consume_message(), "--help [-h]  optional  Prints help");
    }

    #[test]
    fn print_help() {
        // Setup
        let spec = CommandLineSpec::new([
            ArgSpec::new("--foo").alias("-f"),
            ArgSpec::new("--bar"),
        ]);
        let printer = Printer::new(&spec, None);
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help(&interface);

        // Verify
        assert_eq!(
            interface.consume_message(),
            r#"--bar        mandatory  <No doc provided>
--foo [-f]   mandatory  <No doc provided>
--help [-h]  optional   Prints help      "#
        );
    }

    #[test]
    fn print_help_aliases_and_documentation() {
        // Setup
        let spec = CommandLineSpec::without_help([
            ArgSpec::new("--verbose")
                .aliases(["-v", "-x"])
                .help("Log more.")
                .optional(),
            ArgSpec::new("--port").help("The port to listen on."),
        ]);
        let printer = Printer::new(&spec, None);

        // Execute
        let listing = printer.render();

        // Verify
        assert_eq!(
            listing,
            format!(
                "--port{:14}mandatory  The port to listen on.\n--verbose [-v, -x]  optional   Log more.{:13}",
                "", ""
            )
        );
    }

    #[test]
    fn print_help_wrapped() {
        // Setup
        let spec = CommandLineSpec::without_help([
            ArgSpec::new("--foo").help("one two three four five six seven eight nine ten")
        ]);
        let printer = Printer::new(&spec, Some(40));

        // Execute
        let listing = printer.render();

        // Verify
        // The fixed columns take 19 of the 38 targeted, leaving 19 for the description.
        assert_eq!(
            listing,
            vec![
                "--foo   mandatory  one two three four ".to_string(),
                format!("{:19}five six seven{:5}", "", ""),
                format!("{:19}eight nine ten{:5}", "", ""),
            ]
            .join("\n")
        );
    }

    #[test]
    fn print_help_wide_terminal() {
        // Setup
        let spec = CommandLineSpec::without_help([
            ArgSpec::new("--foo").help("one two three four five six seven eight nine ten")
        ]);

        // Execute
        let narrow = Printer::new(&spec, None).render();
        let wide = Printer::new(&spec, Some(500)).render();

        // Verify
        assert_eq!(narrow, wide);
        assert!(!narrow.contains('\n'));
    }
}
