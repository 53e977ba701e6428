//! Internal error type for the lex/parse stages.
//!
//! This never crosses the public API: `transpile`/`transpile_with_meta` catch
//! it at the orchestrator boundary and turn it into a `# TRANSPILE ERROR: ...`
//! comment (see [`crate::transpile_with_meta`]).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Structural parser error: unmatched parenthesis, malformed redirect shape.
    #[error("parse error: {0}")]
    Parse(String),
}
