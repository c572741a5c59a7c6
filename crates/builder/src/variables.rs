//! Rendering of variable declaration and usage lists.

use crate::names::scoped_name;
use crate::query::{RenderMode, Variable};

/// `$name: Type` pairs for an operation header, comma-separated.
///
/// An empty slice yields the empty string; the caller omits the
/// parenthesized list entirely in that case.
pub(crate) fn render_declarations(variables: &[Variable]) -> String {
    variables
        .iter()
        .map(|variable| format!("${}: {}", variable.name, variable.ty))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `field: $variable` pairs for a body's argument list, comma-separated.
///
/// In [`RenderMode::Standalone`] the usage refers to the variable by its
/// original name; in [`RenderMode::Combined`] it refers to the
/// alias-scoped name the shared wrapper declared instead.
pub(crate) fn render_usages(variables: &[Variable], alias: &str, mode: RenderMode) -> String {
    variables
        .iter()
        .map(|variable| match mode {
            RenderMode::Standalone => format!("{}: ${}", variable.name, variable.name),
            RenderMode::Combined => {
                format!("{}: ${}", variable.name, scoped_name(alias, &variable.name))
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Variable> {
        vec![
            Variable::new("parent", "ID!"),
            Variable::new("title", "String"),
        ]
    }

    #[test]
    fn test_declarations() {
        assert_eq!(render_declarations(&sample()), "$parent: ID!, $title: String");
    }

    #[test]
    fn test_declarations_empty() {
        assert_eq!(render_declarations(&[]), "");
    }

    #[test]
    fn test_declarations_round_trip() {
        let variables = sample();
        let rendered = render_declarations(&variables);

        let parsed: Vec<(String, String)> = rendered
            .split(", ")
            .map(|pair| {
                let (name, ty) = pair.split_once(": ").unwrap();
                (name.trim_start_matches('$').to_string(), ty.to_string())
            })
            .collect();

        assert_eq!(
            parsed,
            variables
                .iter()
                .map(|v| (v.name.clone(), v.ty.clone()))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_usages_standalone() {
        assert_eq!(
            render_usages(&sample(), "", RenderMode::Standalone),
            "parent: $parent, title: $title"
        );
    }

    #[test]
    fn test_usages_combined_are_alias_scoped() {
        assert_eq!(
            render_usages(&sample(), "dog", RenderMode::Combined),
            "parent: $dogParent, title: $dogTitle"
        );
    }

    #[test]
    fn test_usages_empty() {
        assert_eq!(render_usages(&[], "dog", RenderMode::Combined), "");
    }
}
