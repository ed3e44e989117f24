use thiserror::Error;

/// Errors raised while building rule sets or assembling a registry.
///
/// Cleaning itself never fails; these only surface when a rule table is
/// compiled or a registry is put together.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RuleError {
    #[error("rule set '{name}' failed to compile: {reason}")]
    Compile { name: String, reason: String },
    #[error("source identifier '{0}' registered twice")]
    DuplicateSource(String),
    #[error("source identifier must not be empty")]
    EmptySource,
}
