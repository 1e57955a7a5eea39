//! Core configuration and error types for DocStack.
//!
//! This crate provides the pieces shared by every DocStack crate: the
//! environment-driven [`DocStackConfig`] and the [`DocStackError`] type.

mod config;
mod error;

pub use config::{DocStackConfig, ExtJsonMode};
pub use error::{DocStackError, DocStackResult};
