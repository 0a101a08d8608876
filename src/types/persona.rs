//! Persona model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named conversational profile. The backend attaches an open-ended set of
/// descriptive attributes (age, background, personality, rules, ...) which
/// are carried through verbatim so nothing is lost on re-submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Persona {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}
