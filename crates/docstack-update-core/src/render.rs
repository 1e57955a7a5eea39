//! MongoDB Extended JSON rendering of update documents.

use anyhow::Context;
use bson::{Bson, Document};
use docstack_core::{DocStackResult, ExtJsonMode};

/// Render `doc` as Extended JSON v2 in the given mode.
#[must_use]
pub fn to_extjson(doc: &Document, mode: ExtJsonMode) -> serde_json::Value {
    let value = Bson::Document(doc.clone());
    match mode {
        ExtJsonMode::Relaxed => value.into_relaxed_extjson(),
        ExtJsonMode::Canonical => value.into_canonical_extjson(),
    }
}

/// Render `doc` as compact Extended JSON text.
pub fn to_extjson_string(doc: &Document, mode: ExtJsonMode) -> DocStackResult<String> {
    let value = to_extjson(doc, mode);
    let text = serde_json::to_string(&value)
        .with_context(|| format!("failed to encode update document as {mode} extended JSON"))?;
    Ok(text)
}
