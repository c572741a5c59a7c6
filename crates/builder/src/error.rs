use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors raised before any text is produced.
///
/// These are all caller errors: a malformed description is rejected up
/// front rather than negotiated at render time.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("query name must not be empty")]
    EmptyQueryName,

    #[error("query `{query}` has a variable with an empty name")]
    EmptyVariableName { query: String },

    #[error("query `{query}` has a nested field with an empty name")]
    EmptyFieldName { query: String },

    #[error("query `{query}` has variables but no alias to namespace them")]
    MissingAlias { query: String },

    #[error("no queries to combine")]
    NothingToCombine,

    #[error("duplicate alias `{alias}` among combined queries")]
    DuplicateAlias { alias: String },
}
