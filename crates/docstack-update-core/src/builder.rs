//! Fluent builder for update documents.
//!
//! The builder keeps one operand per operator. Recording an operator that is
//! already present replaces its operand in place, so a second `set` call
//! discards the field targeted by the first one while `$set` keeps its
//! original key position.

use bson::{Bson, Document};
use docstack_core::ExtJsonMode;
use docstack_update_model::{Position, UpdateOperator};
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

/// Accumulates update operators and builds the composite update document.
///
/// # Examples
///
/// ```
/// use docstack_update_core::UpdateBuilder;
/// use docstack_update_core::bson::doc;
///
/// let update = UpdateBuilder::new().set("status", "done").inc("count", 1).build();
/// assert_eq!(
///     update,
///     doc! { "$set": { "status": "done" }, "$inc": { "count": 1_i64 } }
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateBuilder {
    entries: Vec<(UpdateOperator, Document)>,
}

impl UpdateBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `$set`: `{field: value}`.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Bson>) -> &mut Self {
        self.record(UpdateOperator::Set, field, value)
    }

    /// Record `$unset`: `{field: 1}`.
    pub fn unset(&mut self, field: impl Into<String>) -> &mut Self {
        self.record(UpdateOperator::Unset, field, 1_i32)
    }

    /// Record `$inc`: `{field: amount}`.
    pub fn inc(&mut self, field: impl Into<String>, amount: i64) -> &mut Self {
        self.record(UpdateOperator::Inc, field, amount)
    }

    /// Record `$push`: `{field: value}`.
    pub fn push(&mut self, field: impl Into<String>, value: impl Into<Bson>) -> &mut Self {
        self.record(UpdateOperator::Push, field, value)
    }

    /// Record `$pushAll`: `{field: [values...]}` in iteration order.
    pub fn push_all<I>(&mut self, field: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Bson>,
    {
        self.record(UpdateOperator::PushAll, field, collect_array(values))
    }

    /// Record `$addToSet`: `{field: value}`.
    pub fn add_to_set(&mut self, field: impl Into<String>, value: impl Into<Bson>) -> &mut Self {
        self.record(UpdateOperator::AddToSet, field, value)
    }

    /// Record `$pop`: `{field: -1}` for [`Position::First`], `{field: 1}` for
    /// [`Position::Last`].
    pub fn pop(&mut self, field: impl Into<String>, position: Position) -> &mut Self {
        self.record(UpdateOperator::Pop, field, position.wire_value())
    }

    /// Record `$pull`: `{field: value}`.
    pub fn pull(&mut self, field: impl Into<String>, value: impl Into<Bson>) -> &mut Self {
        self.record(UpdateOperator::Pull, field, value)
    }

    /// Record `$pullAll`: `{field: [values...]}` in iteration order.
    pub fn pull_all<I>(&mut self, field: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Bson>,
    {
        self.record(UpdateOperator::PullAll, field, collect_array(values))
    }

    /// Record `$rename`: `{old_name: new_name}`.
    pub fn rename(
        &mut self,
        old_name: impl Into<String>,
        new_name: impl Into<String>,
    ) -> &mut Self {
        let new_name: String = new_name.into();
        self.record(UpdateOperator::Rename, old_name, new_name)
    }

    /// Build the update document.
    ///
    /// The result holds one entry per recorded operator in first-insertion
    /// order. It shares nothing with the builder, which is left untouched.
    #[must_use]
    pub fn build(&self) -> Document {
        let mut doc = Document::new();
        for (op, operand) in &self.entries {
            doc.insert(op.as_str(), operand.clone());
        }
        debug!(operators = self.entries.len(), "built update document");
        doc
    }

    /// Render [`Self::build`] as MongoDB Extended JSON.
    #[must_use]
    pub fn to_extjson(&self, mode: ExtJsonMode) -> serde_json::Value {
        crate::render::to_extjson(&self.build(), mode)
    }

    /// The operand currently recorded for `op`, if any.
    #[must_use]
    pub fn operand(&self, op: UpdateOperator) -> Option<&Document> {
        self.entries
            .iter()
            .find(|(k, _)| *k == op)
            .map(|(_, operand)| operand)
    }

    /// Recorded operators in key order.
    pub fn operators(&self) -> impl Iterator<Item = UpdateOperator> + '_ {
        self.entries.iter().map(|(op, _)| *op)
    }

    /// Number of distinct operators recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no operator has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn record(
        &mut self,
        op: UpdateOperator,
        field: impl Into<String>,
        value: impl Into<Bson>,
    ) -> &mut Self {
        let field = field.into();
        trace!(operator = %op, field = %field, "recorded update operator");

        let mut operand = Document::new();
        operand.insert(field, value);

        // Keyed by operator only: a repeated operator replaces the earlier field.
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == op) {
            slot.1 = operand;
        } else {
            self.entries.push((op, operand));
        }
        self
    }
}

fn collect_array<I>(values: I) -> Bson
where
    I: IntoIterator,
    I::Item: Into<Bson>,
{
    Bson::Array(values.into_iter().map(Into::into).collect())
}

impl From<&UpdateBuilder> for Document {
    fn from(builder: &UpdateBuilder) -> Self {
        builder.build()
    }
}

impl From<UpdateBuilder> for Document {
    fn from(builder: UpdateBuilder) -> Self {
        builder.build()
    }
}

impl Serialize for UpdateBuilder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.build().serialize(serializer)
    }
}
