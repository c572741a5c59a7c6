//! Variable-name helpers for alias scoping.

/// Upper-case the first character of `s`, leaving the remainder unchanged.
///
/// An empty string is returned unchanged. Callers validate names as
/// non-empty before rendering, so the empty case is never reached from the
/// public build surface.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The namespaced name a combined query declares for one of its variables:
/// the query's alias followed by the capitalized original name
/// (`category` + `parent` -> `categoryParent`).
pub(crate) fn scoped_name(alias: &str, name: &str) -> String {
    format!("{alias}{}", capitalize(name))
}
