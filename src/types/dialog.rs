//! Dialog model.

use serde::{Deserialize, Serialize};

/// One utterance in a generated dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogTurn {
    pub speaker: String,
    pub text: String,
}

/// A generated dialog, identified thereafter by `id` for audio rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dialog {
    pub id: String,
    #[serde(default)]
    pub turns: Vec<DialogTurn>,
}

/// Scene description the dialog generator is conditioned on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
}

impl DialogContext {
    /// Parse a comma-separated topic list, dropping empty entries.
    pub fn with_topics_csv(mut self, csv: &str) -> Self {
        self.topics = csv
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics_csv_trims_and_drops_empties() {
        let context = DialogContext::default().with_topics_csv("billing, , follow-up ,");
        assert_eq!(context.topics, vec!["billing", "follow-up"]);
    }
}
