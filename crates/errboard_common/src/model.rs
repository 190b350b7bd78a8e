//! Error group data model
//!
//! Wire shape served by `GET /getErrorGroups`:
//! `[{ "_id": 1, "count": 5, "representative": {command, error}, "errors": [...] }]`

use crate::error::FetchError;
use crate::text;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One recorded failure of a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// The invoked command line
    pub command: String,

    /// Raw error output
    pub error: String,
}

/// A cluster of textually similar error occurrences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorGroup {
    /// Identifier, unique within one fetched batch
    #[serde(rename = "_id")]
    pub id: i64,

    /// Number of occurrences aggregated into this group (not validated)
    pub count: i64,

    /// Exemplar shown in the summary row
    pub representative: Occurrence,

    /// Member occurrences, in server order
    #[serde(rename = "errors", default)]
    pub occurrences: Vec<Occurrence>,
}

impl ErrorGroup {
    /// Representative error as shown in the summary row
    pub fn summary_error(&self) -> Cow<'_, str> {
        text::truncate(&self.representative.error)
    }

    /// True when the occurrence list disagrees with `count`
    pub fn occurrence_mismatch(&self) -> bool {
        usize::try_from(self.count).map_or(true, |count| count != self.occurrences.len())
    }
}

/// Sorted copy of `groups`, highest count first.
///
/// The sort is stable, so groups with equal counts keep their server order.
pub fn rank_by_count(groups: &[ErrorGroup]) -> Vec<ErrorGroup> {
    let mut ranked = groups.to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Decode a response body into error groups.
///
/// Anything other than a JSON array of error group objects is a decode failure.
pub fn decode_groups(body: &[u8]) -> Result<Vec<ErrorGroup>, FetchError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if !value.is_array() {
        return Err(FetchError::Decode(format!(
            "expected a JSON array of error groups, got {}",
            json_kind(&value)
        )));
    }
    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
