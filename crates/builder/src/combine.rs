//! Merging several query descriptions into one operation.

use crate::body::render_body;
use crate::error::{BuildError, Result};
use crate::names::scoped_name;
use crate::operation::Operation;
use crate::query::{QueryDef, RenderMode, Variable};

/// Merge queries into a single `query combined(...)` operation.
///
/// Every variable is re-declared under its query's alias (`parent` of the
/// `category` query becomes `$categoryParent`), bodies are rendered in
/// [`RenderMode::Combined`] and joined line by line, and fragments are
/// collected in input order.
pub(crate) fn combine(queries: &[QueryDef]) -> Result<String> {
    if queries.is_empty() {
        return Err(BuildError::NothingToCombine);
    }

    let mut aliases: Vec<&str> = Vec::new();
    for query in queries {
        query.validate(RenderMode::Combined)?;
        if let Some(alias) = query.alias.as_deref() {
            if aliases.contains(&alias) {
                return Err(BuildError::DuplicateAlias {
                    alias: alias.to_string(),
                });
            }
            aliases.push(alias);
        }
    }

    let mut variables = Vec::new();
    for query in queries {
        let alias = query.alias.as_deref().unwrap_or_default();
        for variable in &query.variables {
            variables.push(Variable::new(
                scoped_name(alias, &variable.name),
                variable.ty.clone(),
            ));
        }
    }

    let fragments: Vec<String> = queries
        .iter()
        .flat_map(|query| query.fragments.iter().cloned())
        .collect();

    let bodies = queries
        .iter()
        .map(|query| render_body(query, RenderMode::Combined))
        .collect::<Vec<_>>()
        .join("\n");

    tracing::debug!(
        queries = queries.len(),
        variables = variables.len(),
        fragments = fragments.len(),
        "combining queries"
    );

    Ok(Operation::new("combined", &variables, &fragments).render(&bodies))
}
