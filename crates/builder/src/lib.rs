//! # GraphQL query builder
//!
//! This crate turns declarative query descriptions into syntactically
//! valid GraphQL text. A [`QueryDef`] names the query, its typed
//! variables, the requested fields (with arbitrarily nested
//! sub-selections) and optional pre-rendered fragment blocks; rendering
//! is a pure function of that description.
//!
//! Several descriptions can also be merged into a single multi-query
//! operation. Each query's variables are then re-declared under the
//! query's alias (`parent` of the `category` query becomes
//! `$categoryParent`) so the merged declaration list stays free of
//! collisions.
//!
//! The crate produces text only. Parsing the text into a validated
//! GraphQL document is the `graphql-document` crate's job.
//!
//! # Examples
//!
//! ```
//! use graphql_builder::{render_query, QueryDef, RenderMode};
//!
//! let query = QueryDef::new("productCategories")
//!     .with_variable("parent", "ID!")
//!     .with_field("id")
//!     .with_field("title");
//!
//! let text = render_query(&query, RenderMode::Standalone)?;
//! assert_eq!(
//!     text,
//!     "query productCategories($parent: ID!) {\n  productCategories(parent: $parent) {\n    id\n    title\n  }\n}"
//! );
//! # Ok::<(), graphql_builder::BuildError>(())
//! ```

mod body;
mod combine;
mod error;
mod names;
mod operation;
mod query;
mod selection;
mod variables;

pub use error::{BuildError, Result};
pub use query::{Field, QueryDef, RenderMode, Variable};

/// Render one query description to text.
///
/// [`RenderMode::Standalone`] produces a complete operation: the body
/// wrapped in its own `query Name(...) { ... }` envelope with the query's
/// fragments appended after the closing brace. [`RenderMode::Combined`]
/// produces only the bare, alias-scoped body, ready for embedding under a
/// wrapper built by [`combine_queries`].
///
/// # Errors
///
/// Fails fast on a malformed description; see [`QueryDef::validate`].
pub fn render_query(def: &QueryDef, mode: RenderMode) -> Result<String> {
    def.validate(mode)?;
    tracing::debug!(
        query = %def.name,
        ?mode,
        variables = def.variables.len(),
        "rendering query"
    );

    let body = body::render_body(def, mode);
    match mode {
        RenderMode::Standalone => {
            Ok(operation::Operation::new(&def.name, &def.variables, &def.fragments).render(&body))
        }
        RenderMode::Combined => Ok(body),
    }
}

/// Merge several query descriptions into one `query combined(...)`
/// operation with alias-scoped variable declarations.
///
/// # Errors
///
/// Fails on an empty input slice, a duplicate alias, or any description
/// that fails [`QueryDef::validate`] for [`RenderMode::Combined`].
pub fn combine_queries(queries: &[QueryDef]) -> Result<String> {
    combine::combine(queries)
}
