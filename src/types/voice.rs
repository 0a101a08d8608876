//! Voice catalog entries and persona-voice assignments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A read-only voice catalog entry. `age` may be a number or a descriptive
/// string depending on the voice database, so it stays untyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voice {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Current persona name -> voice identifier mapping.
pub type VoiceAssignments = BTreeMap<String, String>;
