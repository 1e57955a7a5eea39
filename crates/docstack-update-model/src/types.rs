//! Update operator vocabulary.
//!
//! Enum variants use idiomatic Rust `PascalCase` naming with `#[serde(rename)]`
//! attributes to map to the `$camelCase` wire names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UpdateModelError;

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

/// A top-level operator of an update document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateOperator {
    /// Assign a value to a field.
    #[serde(rename = "$set")]
    Set,
    /// Remove a field.
    #[serde(rename = "$unset")]
    Unset,
    /// Increment a numeric field.
    #[serde(rename = "$inc")]
    Inc,
    /// Append one value to an array field.
    #[serde(rename = "$push")]
    Push,
    /// Append several values to an array field.
    #[serde(rename = "$pushAll")]
    PushAll,
    /// Append a value to an array field unless already present.
    #[serde(rename = "$addToSet")]
    AddToSet,
    /// Remove the first or last element of an array field.
    #[serde(rename = "$pop")]
    Pop,
    /// Remove matching values from an array field.
    #[serde(rename = "$pull")]
    Pull,
    /// Remove every listed value from an array field.
    #[serde(rename = "$pullAll")]
    PullAll,
    /// Rename a field.
    #[serde(rename = "$rename")]
    Rename,
}

impl UpdateOperator {
    /// Every supported operator, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Set,
        Self::Unset,
        Self::Inc,
        Self::Push,
        Self::PushAll,
        Self::AddToSet,
        Self::Pop,
        Self::Pull,
        Self::PullAll,
        Self::Rename,
    ];

    /// Returns the wire-format operator name (e.g. `"$set"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Set => "$set",
            Self::Unset => "$unset",
            Self::Inc => "$inc",
            Self::Push => "$push",
            Self::PushAll => "$pushAll",
            Self::AddToSet => "$addToSet",
            Self::Pop => "$pop",
            Self::Pull => "$pull",
            Self::PullAll => "$pullAll",
            Self::Rename => "$rename",
        }
    }

    /// Returns `true` for operators whose operand value is a list of values.
    #[must_use]
    pub fn is_bulk(&self) -> bool {
        matches!(self, Self::PushAll | Self::PullAll)
    }
}

impl fmt::Display for UpdateOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateOperator {
    type Err = UpdateModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UpdateModelError::UnknownOperator { name: s.to_owned() })
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// End of an array that `$pop` removes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// The last element.
    #[serde(rename = "LAST")]
    Last,
    /// The first element.
    #[serde(rename = "FIRST")]
    First,
}

impl Position {
    /// Returns the `$pop` operand: `-1` for [`Position::First`], `1` for
    /// [`Position::Last`].
    #[must_use]
    pub fn wire_value(&self) -> i32 {
        match self {
            Self::First => -1,
            Self::Last => 1,
        }
    }
}
