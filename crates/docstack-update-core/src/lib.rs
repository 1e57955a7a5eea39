//! Update document builder for DocStack.
//!
//! [`UpdateBuilder`] records update operators through fluent calls and
//! materializes them as a single `bson::Document` that can be handed to a
//! MongoDB driver's update call unmodified.

pub mod builder;
pub mod render;

pub use bson;
pub use builder::UpdateBuilder;
pub use docstack_update_model::{Position, UpdateOperator};
pub use render::{to_extjson, to_extjson_string};
