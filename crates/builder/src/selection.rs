//! Recursive rendering of requested fields.
//!
//! Each nesting level adds exactly two spaces on top of the parent indent.
//! Depth is bounded only by the call stack; realistic selections nest tens
//! of levels at most.

use crate::query::Field;

/// Render one field at the given indentation.
///
/// Leaves (field names and fragment spreads) are emitted verbatim after
/// the indent. Nested selections recurse with the indent widened by two
/// spaces.
pub(crate) fn render_field(field: &Field, indent: &str) -> String {
    match field {
        Field::Leaf(text) => format!("{indent}{text}"),
        Field::Nested { name, selection } => {
            let inner = render_selection(selection, &format!("{indent}  "));
            format!("{indent}{name} {{\n{inner}\n{indent}}}")
        }
    }
}

/// Render a list of fields, one per line.
pub(crate) fn render_selection(fields: &[Field], indent: &str) -> String {
    fields
        .iter()
        .map(|field| render_field(field, indent))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_is_verbatim() {
        assert_eq!(render_field(&"dog".into(), ""), "dog");
        assert_eq!(render_field(&"...nameFields".into(), "  "), "  ...nameFields");
    }

    #[test]
    fn test_nested_field() {
        let field = Field::nested("layers", vec!["id".into(), "title".into()]);
        assert_eq!(render_field(&field, ""), "layers {\n  id\n  title\n}");
    }

    #[test]
    fn test_nested_field_compounds_parent_indent() {
        let field = Field::nested("layers", vec!["id".into(), "title".into()]);
        assert_eq!(render_field(&field, " "), " layers {\n   id\n   title\n }");
    }

    #[test]
    fn test_selection_flat() {
        let fields: Vec<Field> = vec!["id".into(), "title".into()];
        assert_eq!(render_selection(&fields, ""), "id\ntitle");
        assert_eq!(render_selection(&fields, " "), " id\n title");
    }

    #[test]
    fn test_selection_mixed() {
        let fields: Vec<Field> = vec![
            "id".into(),
            "title".into(),
            Field::nested("layers", vec!["id".into(), "title".into()]),
        ];
        assert_eq!(
            render_selection(&fields, ""),
            "id\ntitle\nlayers {\n  id\n  title\n}"
        );
        assert_eq!(
            render_selection(&fields, " "),
            " id\n title\n layers {\n   id\n   title\n }"
        );
    }

    #[test]
    fn test_selection_empty() {
        assert_eq!(render_selection(&[], ""), "");
        assert_eq!(render_selection(&[], "    "), "");
    }

    #[test]
    fn test_three_levels_add_two_spaces_each() {
        let field = Field::nested(
            "a",
            vec![Field::nested("b", vec![Field::nested("c", vec!["id".into()])])],
        );
        assert_eq!(
            render_field(&field, ""),
            "a {\n  b {\n    c {\n      id\n    }\n  }\n}"
        );
    }
}
