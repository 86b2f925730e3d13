//! Prompt templates: one per content kind, each mapping a request's named
//! fields into a single instruction string.
//!
//! Two renderings exist for every kind. The structured one (web gateway)
//! names the exact JSON keys the model must return; the narrative one (CLI)
//! asks for numbered prose sections that are shown to the user verbatim.
//!
//! No field is required. A missing field renders as an empty value, and only
//! the documented optional fields fall back to defaults.

mod campaign;
mod lead_score;
mod pitch;

pub use campaign::CampaignRequest;
pub use lead_score::LeadScoreRequest;
pub use pitch::PitchRequest;

use crate::utils::text::truncate_with_ellipsis;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Upper bound on the activity-log summary derived from a request.
pub const MAX_SUMMARY_CHARS: usize = 120;

/// The use-case discriminator shared by logging and archiving.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum ContentKind {
    Campaign,
    Pitch,
    #[serde(rename = "Lead Score")]
    #[strum(serialize = "Lead Score")]
    LeadScore,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [Self::Campaign, Self::Pitch, Self::LeadScore];

    /// File name of the CLI archive for this kind.
    pub fn archive_file_name(self) -> &'static str {
        match self {
            Self::Campaign => "saved_campaigns.json",
            Self::Pitch => "saved_pitches.json",
            Self::LeadScore => "saved_leads.json",
        }
    }

    /// Plural heading used when listing archived items.
    pub fn plural_title(self) -> &'static str {
        match self {
            Self::Campaign => "Campaigns",
            Self::Pitch => "Pitches",
            Self::LeadScore => "Lead Scores",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// Strict JSON output with a named key schema.
    Structured,
    /// Numbered prose sections for direct display.
    Narrative,
}

/// Shared contract of the per-kind request types.
pub trait PromptTemplate {
    const KIND: ContentKind;
    /// Top-level keys the structured prompt asks the model to return.
    const SECTIONS: &'static [&'static str];

    fn structured_prompt(&self, max_field_chars: usize) -> String;
    fn narrative_prompt(&self, max_field_chars: usize) -> String;
    /// Short human-readable description for the activity log.
    fn summary(&self) -> String;
    /// The resolved input fields, in display order, for archiving.
    fn archive_fields(&self) -> Map<String, Value>;
}

/// One generation request of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationRequest {
    Campaign(CampaignRequest),
    Pitch(PitchRequest),
    LeadScore(LeadScoreRequest),
}

macro_rules! dispatch {
    ($self:expr, $req:ident => $body:expr) => {
        match $self {
            GenerationRequest::Campaign($req) => $body,
            GenerationRequest::Pitch($req) => $body,
            GenerationRequest::LeadScore($req) => $body,
        }
    };
}

impl GenerationRequest {
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Campaign(_) => CampaignRequest::KIND,
            Self::Pitch(_) => PitchRequest::KIND,
            Self::LeadScore(_) => LeadScoreRequest::KIND,
        }
    }

    /// Render the prompt. Deterministic: equal requests yield equal text.
    pub fn build_prompt(&self, style: PromptStyle, max_field_chars: usize) -> String {
        match style {
            PromptStyle::Structured => dispatch!(self, r => r.structured_prompt(max_field_chars)),
            PromptStyle::Narrative => dispatch!(self, r => r.narrative_prompt(max_field_chars)),
        }
    }

    pub fn summary(&self) -> String {
        let summary = dispatch!(self, r => r.summary());
        truncate_with_ellipsis(&summary, MAX_SUMMARY_CHARS)
    }

    pub fn expected_sections(&self) -> &'static [&'static str] {
        match self {
            Self::Campaign(_) => CampaignRequest::SECTIONS,
            Self::Pitch(_) => PitchRequest::SECTIONS,
            Self::LeadScore(_) => LeadScoreRequest::SECTIONS,
        }
    }

    pub fn archive_fields(&self) -> Map<String, Value> {
        dispatch!(self, r => r.archive_fields())
    }
}

impl From<CampaignRequest> for GenerationRequest {
    fn from(request: CampaignRequest) -> Self {
        Self::Campaign(request)
    }
}

impl From<PitchRequest> for GenerationRequest {
    fn from(request: PitchRequest) -> Self {
        Self::Pitch(request)
    }
}

impl From<LeadScoreRequest> for GenerationRequest {
    fn from(request: LeadScoreRequest) -> Self {
        Self::LeadScore(request)
    }
}

/// Accept any JSON scalar for a text field. Strings pass through, numbers and
/// booleans are rendered, `null` counts as absent.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// Field value as embedded in a prompt, capped at `max_chars`.
pub(crate) fn clip(value: &str, max_chars: usize) -> String {
    truncate_with_ellipsis(value, max_chars)
}

pub(crate) fn field_map<'a>(
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Map<String, Value> {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect()
}
