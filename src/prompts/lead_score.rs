use super::{ContentKind, PromptTemplate, clip, field_map, lenient_text};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inputs for lead qualification. None of the fields has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadScoreRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub budget: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub need: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub urgency: Option<String>,
}

impl LeadScoreRequest {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn budget(&self) -> &str {
        self.budget.as_deref().unwrap_or_default()
    }

    pub fn need(&self) -> &str {
        self.need.as_deref().unwrap_or_default()
    }

    pub fn urgency(&self) -> &str {
        self.urgency.as_deref().unwrap_or_default()
    }

    fn details(&self, cap: usize) -> String {
        format!(
            "Name: {}\nBudget: {}\nNeed: {}\nUrgency: {}",
            clip(self.name(), cap),
            clip(self.budget(), cap),
            clip(self.need(), cap),
            clip(self.urgency(), cap),
        )
    }
}

impl PromptTemplate for LeadScoreRequest {
    const KIND: ContentKind = ContentKind::LeadScore;
    const SECTIONS: &'static [&'static str] = &["Score", "Reasoning", "Conversion Probability"];

    fn structured_prompt(&self, max_field_chars: usize) -> String {
        format!(
            "Score this lead based on the following details:\n\
             {details}\n\
             \n\
             Return a JSON object with strictly these keys:\n\
             \"Score\": number (0-100),\n\
             \"Reasoning\": \"string explanation\",\n\
             \"Conversion Probability\": \"string (e.g., High, Medium, Low)\"",
            details = self.details(max_field_chars),
        )
    }

    fn narrative_prompt(&self, max_field_chars: usize) -> String {
        format!(
            "Score this lead from 0-100:\n\
             {details}\n\
             \n\
             Provide:\n\
             1. Overall Score (0-100)\n\
             2. Detailed Reasoning\n\
             3. Recommendations for next steps",
            details = self.details(max_field_chars),
        )
    }

    fn summary(&self) -> String {
        format!("{} (${})", self.name(), self.budget())
    }

    fn archive_fields(&self) -> Map<String, Value> {
        field_map([
            ("name", self.name()),
            ("budget", self.budget()),
            ("need", self.need()),
            ("urgency", self.urgency()),
        ])
    }
}
