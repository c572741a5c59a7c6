//! The declarative query description consumed by the renderers.

use serde::{Deserialize, Serialize};

use crate::error::{BuildError, Result};

/// A typed operation variable.
///
/// The type expression is opaque: it is echoed into the rendered text
/// verbatim and never parsed (e.g. `"ID!"`, `"[String!]"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Variable name, without the leading `$`.
    pub name: String,
    /// Opaque GraphQL type expression.
    #[serde(rename = "type")]
    pub ty: String,
}

impl Variable {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A requested field.
///
/// Either a leaf (a plain field name, or a fragment spread written
/// `"...name"`) or a named selection with nested fields of its own.
/// Selections form a tree; in the serialized form a leaf is a bare string
/// and a nested selection is an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    /// Plain field name or fragment spread, emitted verbatim.
    Leaf(String),
    /// Named selection with sub-fields.
    Nested {
        name: String,
        selection: Vec<Field>,
    },
}

impl Field {
    /// Build a nested selection.
    #[must_use]
    pub fn nested(name: impl Into<String>, selection: impl IntoIterator<Item = Self>) -> Self {
        Self::Nested {
            name: name.into(),
            selection: selection.into_iter().collect(),
        }
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Self::Leaf(name.to_string())
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Self::Leaf(name)
    }
}

/// Controls how a query body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// A self-contained operation: the body is indented one level inside
    /// its own `query ... { }` envelope and variable usages keep their
    /// original `$name`.
    Standalone,
    /// A body embedded under a combiner-produced wrapper: rendered at
    /// column zero, with variable usages renamed to
    /// `$<alias><CapitalizedName>` to match the shared declarations.
    Combined,
}

impl RenderMode {
    #[must_use]
    pub const fn is_standalone(self) -> bool {
        matches!(self, Self::Standalone)
    }
}

/// A declarative description of one query.
///
/// All parts are plain values; a description is immutable once built and
/// every render call is a pure function of it. `alias` is only required
/// when the query is combined with others, where it namespaces the
/// query's variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDef {
    /// Field name the query selects (also used as the operation name when
    /// rendered standalone).
    pub name: String,
    /// Short identifier namespacing this query's variables when combined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Typed variables, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<Variable>,
    /// Requested fields, in output order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selection: Vec<Field>,
    /// Pre-rendered fragment blocks appended after the operation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fragments: Vec<String>,
}

impl QueryDef {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            variables: Vec::new(),
            selection: Vec::new(),
            fragments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.variables.push(Variable::new(name, ty));
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<Field>) -> Self {
        self.selection.push(field.into());
        self
    }

    #[must_use]
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragments.push(fragment.into());
        self
    }

    /// Check this description against the given render mode.
    ///
    /// # Errors
    ///
    /// Fails on an empty query name, an empty variable name, an empty
    /// nested field name, or a [`RenderMode::Combined`] render of a query
    /// that has variables but no alias.
    pub fn validate(&self, mode: RenderMode) -> Result<()> {
        if self.name.is_empty() {
            return Err(BuildError::EmptyQueryName);
        }
        for variable in &self.variables {
            if variable.name.is_empty() {
                return Err(BuildError::EmptyVariableName {
                    query: self.name.clone(),
                });
            }
        }
        if mode == RenderMode::Combined
            && !self.variables.is_empty()
            && self.alias.as_deref().unwrap_or_default().is_empty()
        {
            return Err(BuildError::MissingAlias {
                query: self.name.clone(),
            });
        }
        validate_fields(&self.selection, &self.name)
    }
}

fn validate_fields(fields: &[Field], query: &str) -> Result<()> {
    for field in fields {
        if let Field::Nested { name, selection } = field {
            if name.is_empty() {
                return Err(BuildError::EmptyFieldName {
                    query: query.to_string(),
                });
            }
            validate_fields(selection, query)?;
        }
    }
    Ok(())
}
