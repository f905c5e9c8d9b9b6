//! Frontend Models
//!
//! Response shapes of the admin API, checked at the network boundary.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Aggregate task review counts from `/api/admin/summary`.
///
/// Only a JSON object is accepted. Every count is optional: a field the
/// backend leaves out (or sends as `null`) renders as blank instead of
/// rejecting the whole summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Summary {
    pub total_tasks: Option<i64>,
    pub submitted: Option<i64>,
    pub accepted: Option<i64>,
    pub rejected: Option<i64>,
}

impl TryFrom<Map<String, Value>> for Summary {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            total_tasks: count_field(&map, "total_tasks")?,
            submitted: count_field(&map, "submitted")?,
            accepted: count_field(&map, "accepted")?,
            rejected: count_field(&map, "rejected")?,
        })
    }
}

fn count_field(map: &Map<String, Value>, key: &str) -> Result<Option<i64>, String> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| format!("summary field `{}` is not an integer: {}", key, value)),
    }
}

/// Work entry from `/api/works` (matches backend `WorkOut`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub id: i64,
    pub name: String,
    pub role_name: String,
}
