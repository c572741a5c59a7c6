//! Composition of one query's selection block.

use crate::query::{QueryDef, RenderMode};
use crate::selection::render_selection;
use crate::variables::render_usages;

/// Compose the selection block for one query.
///
/// A standalone body is indented one level because it sits inside its own
/// operation braces; a combined body sits at column zero directly under
/// the shared wrapper. A query without variables omits the argument list
/// entirely rather than emitting `()`.
pub(crate) fn render_body(def: &QueryDef, mode: RenderMode) -> String {
    let alias = def.alias.as_deref().unwrap_or_default();
    let usages = render_usages(&def.variables, alias, mode);

    let indent = if mode.is_standalone() { "  " } else { "" };
    let fields = render_selection(&def.selection, &format!("{indent}  "));

    if usages.is_empty() {
        format!("{indent}{} {{\n{fields}\n{indent}}}", def.name)
    } else {
        format!("{indent}{}({usages}) {{\n{fields}\n{indent}}}", def.name)
    }
}
