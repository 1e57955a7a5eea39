//! Update operator model types for DocStack.
//!
//! The operator vocabulary follows the MongoDB update document wire format,
//! where every top-level key of an update document is an operator name such as
//! `$set` or `$inc`.

pub mod error;
pub mod types;

pub use error::UpdateModelError;
pub use types::{Position, UpdateOperator};
