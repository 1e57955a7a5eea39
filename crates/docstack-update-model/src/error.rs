//! Update model error types.

/// Errors produced when interpreting update model values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateModelError {
    /// The string is not an operator name in the supported vocabulary.
    #[error("unknown update operator: {name}")]
    UnknownOperator {
        /// The rejected operator name.
        name: String,
    },
}
