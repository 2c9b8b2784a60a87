//! Error types for the student portal.

use thiserror::Error;

/// Price label parsing errors.
///
/// Course prices are display labels such as `"500000 so'm"`. The amount is
/// the first whitespace-separated token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    /// Label was empty or only whitespace.
    #[error("Price label is empty")]
    Empty,

    /// First token of the label is not an amount.
    #[error("Price label does not start with an amount: '{token}'")]
    NotNumeric { token: String },
}

/// Unknown view name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown view: '{0}'")]
pub struct ParseViewError(pub String);

/// Catalog data errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog JSON could not be parsed.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two entries share an id.
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u32 },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Key binding points at an unknown view.
    #[error("Invalid key binding '{key}': {source}")]
    InvalidBinding {
        key: String,
        #[source]
        source: ParseViewError,
    },
}
