#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Space between two adjacent columns.
pub(crate) const PADDING_WIDTH: usize = 2;

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_DESCRIPTION_WIDTH: usize = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TotalWidth(pub usize);

/// Renders rows of fixed columns followed by one trailing, wrappable, description column.
/// Every cell is left-aligned and padded to its column width.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ColumnRenderer {
    fixed: Vec<usize>,
    description: usize,
}

impl ColumnRenderer {
    /// Produce a renderer which never wraps the description.
    pub(crate) fn new(fixed: Vec<usize>, description: usize) -> Self {
        Self { fixed, description }
    }

    /// Produce a renderer which fits the description within the total width, where possible.
    pub(crate) fn guided(fixed: Vec<usize>, description: usize, total_width: TotalWidth) -> Self {
        let non_description: usize = fixed.iter().map(|w| w + PADDING_WIDTH).sum();
        let target_total_width = (total_width.0 as f64 * TARGET_TOTAL_FACTOR) as usize;

        if description + non_description <= target_total_width {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_description} and description fit within the target total {target_total_width}.  Selecting description: {description}.");
            }

            Self::new(fixed, description)
        } else {
            let calculated = std::cmp::max(
                target_total_width.saturating_sub(non_description),
                MINIMUM_DESCRIPTION_WIDTH,
            );
            // Never widen a description which was already narrow.
            let calculated = std::cmp::min(calculated, std::cmp::max(description, 2));
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Columns {non_description} leave too little of the target total {target_total_width}.  Selecting description: {calculated}.");
            }

            Self::new(fixed, calculated)
        }
    }

    pub(crate) fn render(&self, cells: &[&str], description: &str) -> Vec<String> {
        assert_eq!(cells.len(), self.fixed.len());
        let padding = " ".repeat(PADDING_WIDTH);
        let width = self.description;
        let mut prefix = String::default();
        let mut blank = String::default();

        for (cell, &cell_width) in cells.iter().zip(&self.fixed) {
            prefix.push_str(format!("{cell:cell_width$}{padding}").as_str());
            blank.push_str(format!("{:cell_width$}{padding}", "").as_str());
        }

        let mut parts = chunk(description, width).into_iter();
        let first = parts.next().unwrap_or_default();
        let mut out = vec![format!("{prefix}{first:width$}")];

        for part in parts {
            out.push(format!("{blank}{part:width$}"));
        }

        out
    }
}

pub(crate) fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() < width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    // Need room for at least one character plus the hyphen.
    let increment = std::cmp::max(width, 2) - 1;
    let characters: Vec<char> = word.chars().collect();
    let mut left = 0;

    while characters.len() - left > increment + 1 {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

/// Where the process facing messages are written.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, message: String);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }
}

#[cfg(any(test, feature = "unit_test"))]
pub(crate) mod util {
    use crate::parser::UserInterface;
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct InMemoryInterface {
        message: RefCell<Vec<String>>,
        error: RefCell<Vec<String>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            self.message.borrow_mut().push(message);
        }

        fn print_error(&self, message: String) {
            self.error.borrow_mut().push(message);
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> (Option<String>, Option<String>) {
            let InMemoryInterface { message, error } = self;
            let join = |lines: Vec<String>| {
                if lines.is_empty() {
                    None
                } else {
                    Some(lines.join("\n"))
                }
            };

            (join(message.into_inner()), join(error.into_inner()))
        }

        #[cfg(test)]
        pub(crate) fn consume_message(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(error, None);
            message.unwrap()
        }

        #[cfg(test)]
        pub(crate) fn consume_error(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(message, None);
            error.unwrap()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 5, vec![])]
    #[case("abc", 5, vec!["abc"])]
    #[case("abc def", 7, vec!["abc def"])]
    #[case("abc def", 6, vec!["abc", "def"])]
    #[case("abc  def   ghi", 7, vec!["abc def", "ghi"])]
    #[case("abcdefgh", 4, vec!["abc-", "def-", "gh"])]
    #[case("abcdef", 3, vec!["ab-", "cd-", "ef"])]
    #[case("abcd", 4, vec!["abcd"])]
    #[case("x abcdefgh", 4, vec!["x", "abc-", "def-", "gh"])]
    fn chunk_paragraph(#[case] paragraph: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        // Execute
        let lines = chunk(paragraph, width);

        // Verify
        assert_eq!(lines, expected);
        for line in &lines {
            assert!(line.chars().count() <= width, "{line} exceeds {width}");
        }
    }

    #[test]
    fn chunk_unicode() {
        // Execute
        let lines = chunk("ééééé", 3);

        // Verify
        assert_eq!(lines, vec!["éé-", "ééé"]);
    }

    #[test]
    fn render_unwrapped() {
        // Setup
        let renderer = ColumnRenderer::new(vec![5, 3], 6);

        // Execute
        let lines = renderer.render(&["ab", "c"], "xy z");

        // Verify
        assert_eq!(lines, vec!["ab     c    xy z  "]);
    }

    #[test]
    fn render_wrapped() {
        // Setup
        let renderer = ColumnRenderer::new(vec![2], 3);

        // Execute
        let lines = renderer.render(&["ab"], "xyz uvw");

        // Verify
        assert_eq!(lines, vec!["ab  xyz", "    uvw"]);
    }

    #[test]
    fn render_empty_description() {
        // Setup
        let renderer = ColumnRenderer::new(vec![2], 3);

        // Execute
        let lines = renderer.render(&["ab"], "");

        // Verify
        assert_eq!(lines, vec!["ab     "]);
    }

    #[rstest]
    #[case(20, 40, 20)]
    #[case(20, 1000, 20)]
    #[case(100, 40, 26)]
    #[case(100, 10, 17)]
    #[case(5, 10, 5)]
    fn guided(#[case] description: usize, #[case] total: usize, #[case] expected: usize) {
        // Execute
        let renderer = ColumnRenderer::guided(vec![10], description, TotalWidth(total));

        // Verify
        assert_eq!(renderer, ColumnRenderer::new(vec![10], expected));
    }

    #[test]
    fn in_memory_interface() {
        // Setup
        let interface = util::InMemoryInterface::default();

        // Execute
        interface.print("a".to_string());
        interface.print("b".to_string());

        // Verify
        assert_eq!(interface.consume_message(), "a\nb");
    }
}
