use super::{ContentKind, PromptTemplate, clip, field_map, lenient_text};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inputs for a sales pitch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub product: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub customer_persona: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub pain_points: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub format: Option<String>,
}

impl PitchRequest {
    pub const DEFAULT_PAIN_POINTS: &'static str = "General efficiency";
    pub const DEFAULT_FORMAT: &'static str = "Elevator Pitch";

    pub fn product(&self) -> &str {
        self.product.as_deref().unwrap_or_default()
    }

    pub fn customer_persona(&self) -> &str {
        self.customer_persona.as_deref().unwrap_or_default()
    }

    pub fn pain_points(&self) -> &str {
        self.pain_points
            .as_deref()
            .unwrap_or(Self::DEFAULT_PAIN_POINTS)
    }

    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or(Self::DEFAULT_FORMAT)
    }
}

impl PromptTemplate for PitchRequest {
    const KIND: ContentKind = ContentKind::Pitch;
    const SECTIONS: &'static [&'static str] = &[
        "Pitch Content",
        "Why It Works",
        "Key Differentiators",
        "Handling Objections",
    ];

    fn structured_prompt(&self, max_field_chars: usize) -> String {
        let format = clip(self.format(), max_field_chars);
        format!(
            "Create a sales pitch for:\n\
             Product: {product}\n\
             Customer Persona: {persona}\n\
             Key Pain Points to Solve: {pain_points}\n\
             Format: {format}\n\
             \n\
             Return a JSON object with strictly these keys:\n\
             \"Pitch Content\": \"The actual script/email content formatted for {format}.\",\n\
             \"Why It Works\": \"Explanation of the psychological triggers used.\",\n\
             \"Key Differentiators\": [list of 3 unique selling points],\n\
             \"Handling Objections\": [list of 2 potential objections, each paired with a \
             1-sentence rebuttal]",
            product = clip(self.product(), max_field_chars),
            persona = clip(self.customer_persona(), max_field_chars),
            pain_points = clip(self.pain_points(), max_field_chars),
        )
    }

    fn narrative_prompt(&self, max_field_chars: usize) -> String {
        let format = clip(self.format(), max_field_chars);
        format!(
            "Create a compelling sales pitch for:\n\
             Product: {product}\n\
             Target Audience: {persona}\n\
             Pain Points: {pain_points}\n\
             Format: {format}\n\
             \n\
             Provide:\n\
             1. The actual pitch (formatted for {format})\n\
             2. Key psychological triggers used\n\
             3. Objection handling strategies",
            product = clip(self.product(), max_field_chars),
            persona = clip(self.customer_persona(), max_field_chars),
            pain_points = clip(self.pain_points(), max_field_chars),
        )
    }

    fn summary(&self) -> String {
        format!("{} - {}", self.product(), self.format())
    }

    fn archive_fields(&self) -> Map<String, Value> {
        field_map([
            ("product", self.product()),
            ("customer_persona", self.customer_persona()),
            ("pain_points", self.pain_points()),
            ("format", self.format()),
        ])
    }
}
