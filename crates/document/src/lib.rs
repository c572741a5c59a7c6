//! # GraphQL document layer
//!
//! Turns text rendered by `graphql-builder` into parsed GraphQL
//! documents. Parsing is delegated wholly to `apollo-parser`; this crate
//! never inspects the resulting tree beyond collecting syntax errors, so
//! the parsed representation stays opaque to the builder core.
//!
//! Callers that only need raw text (the primary mode for testing the
//! builder in isolation) use `graphql-builder` directly; the functions
//! here are the render-then-parse convenience path.
//!
//! # Examples
//!
//! ```
//! use graphql_builder::QueryDef;
//! use graphql_document::build_query;
//!
//! let query = QueryDef::new("viewer").with_field("id");
//! let parsed = build_query(&query)?;
//! assert!(parsed.source().starts_with("query viewer"));
//! # Ok::<(), graphql_document::DocumentError>(())
//! ```

use std::sync::Arc;

use graphql_builder::{BuildError, QueryDef, RenderMode};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocumentError>;

/// A parse error with position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error message
    pub message: String,
    /// Byte offset where the error occurred
    pub offset: usize,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at offset {})", self.message, self.offset)
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("query text failed to parse ({} syntax error(s))", .errors.len())]
    Parse { errors: Vec<ParseError> },
}

impl DocumentError {
    /// The collected syntax errors, if this is a parse failure.
    #[must_use]
    pub fn parse_errors(&self) -> &[ParseError] {
        match self {
            Self::Parse { errors } => errors,
            Self::Build(_) => &[],
        }
    }
}

/// A rendered query together with its parsed syntax tree.
#[derive(Debug)]
pub struct ParsedQuery {
    source: Arc<str>,
    tree: apollo_parser::SyntaxTree,
}

impl ParsedQuery {
    /// The query text this document was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed syntax tree (CST for position/token information).
    #[must_use]
    pub fn tree(&self) -> &apollo_parser::SyntaxTree {
        &self.tree
    }
}

/// Parse query text into a syntax tree, failing on any syntax error.
///
/// # Errors
///
/// Returns [`DocumentError::Parse`] with every collected error when the
/// text is not syntactically valid GraphQL.
pub fn parse_query(text: &str) -> Result<ParsedQuery> {
    let tree = apollo_parser::Parser::new(text).parse();

    let errors: Vec<ParseError> = tree
        .errors()
        .map(|e| ParseError {
            message: e.message().to_string(),
            offset: e.index(),
        })
        .collect();

    if errors.is_empty() {
        Ok(ParsedQuery {
            source: Arc::from(text),
            tree,
        })
    } else {
        tracing::debug!(errors = errors.len(), "query text failed to parse");
        Err(DocumentError::Parse { errors })
    }
}

/// Render a standalone operation and parse it.
///
/// # Errors
///
/// Propagates builder validation errors and fails on syntactically
/// invalid output (for instance a malformed fragment block supplied in
/// the description).
pub fn build_query(def: &QueryDef) -> Result<ParsedQuery> {
    let text = graphql_builder::render_query(def, RenderMode::Standalone)?;
    parse_query(&text)
}

/// Combine query descriptions into one operation and parse it.
///
/// # Errors
///
/// Propagates builder errors (empty input, duplicate aliases, malformed
/// descriptions) and fails on syntactically invalid output.
pub fn combine_queries(queries: &[QueryDef]) -> Result<ParsedQuery> {
    let text = graphql_builder::combine_queries(queries)?;
    parse_query(&text)
}
