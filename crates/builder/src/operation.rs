//! The outer `query Name(...) { ... }` envelope.

use crate::query::Variable;
use crate::variables::render_declarations;

/// Fragment blocks joined verbatim, separated by two blank lines.
pub(crate) fn render_fragments(fragments: &[String]) -> String {
    fragments.join("\n\n\n")
}

/// Operation-level metadata, bound before the inner body text exists.
///
/// The build is two-phase: construct the operation from name, variables
/// and fragments, then [`render`](Operation::render) it over the composed
/// body text once that is ready.
pub(crate) struct Operation<'a> {
    name: &'a str,
    variables: &'a [Variable],
    fragments: &'a [String],
}

impl<'a> Operation<'a> {
    pub(crate) fn new(
        name: &'a str,
        variables: &'a [Variable],
        fragments: &'a [String],
    ) -> Self {
        Self {
            name,
            variables,
            fragments,
        }
    }

    /// Wrap composed body text into the full operation.
    ///
    /// The declaration list is omitted entirely when there are no
    /// variables. Fragment text, when present, follows the closing brace
    /// on the next line.
    pub(crate) fn render(&self, body: &str) -> String {
        let declarations = render_declarations(self.variables);
        let fragments = render_fragments(self.fragments);

        let mut text = if declarations.is_empty() {
            format!("query {} {{\n{body}\n}}", self.name)
        } else {
            format!("query {}({declarations}) {{\n{body}\n}}", self.name)
        };
        if !fragments.is_empty() {
            text.push('\n');
            text.push_str(&fragments);
        }
        text
    }
}
