use super::{ContentKind, PromptTemplate, clip, field_map, lenient_text};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inputs for an ad campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub product: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub audience: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub goal: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tone: Option<String>,
}

impl CampaignRequest {
    pub const DEFAULT_GOAL: &'static str = "General Awareness";
    pub const DEFAULT_TONE: &'static str = "Professional";

    pub fn product(&self) -> &str {
        self.product.as_deref().unwrap_or_default()
    }

    pub fn audience(&self) -> &str {
        self.audience.as_deref().unwrap_or_default()
    }

    pub fn platform(&self) -> &str {
        self.platform.as_deref().unwrap_or_default()
    }

    pub fn goal(&self) -> &str {
        self.goal.as_deref().unwrap_or(Self::DEFAULT_GOAL)
    }

    pub fn tone(&self) -> &str {
        self.tone.as_deref().unwrap_or(Self::DEFAULT_TONE)
    }

    /// `"Any"` hands the platform choice to the model.
    pub fn lets_model_choose_platform(&self) -> bool {
        self.platform().trim().eq_ignore_ascii_case("any")
    }

    fn details(&self, cap: usize) -> String {
        format!(
            "Product: {}\nTarget Audience: {}\nPlatform: {}\nGoal: {}\nTone: {}",
            clip(self.product(), cap),
            clip(self.audience(), cap),
            clip(self.platform(), cap),
            clip(self.goal(), cap),
            clip(self.tone(), cap),
        )
    }

    fn platform_instruction(&self) -> &'static str {
        if self.lets_model_choose_platform() {
            "The platform is 'Any': choose the single best platform for this product and \
             audience yourself, and explain the choice under \"Recommended Platform\"."
        } else {
            "Tailor every idea and ad copy to the platform given above."
        }
    }
}

impl PromptTemplate for CampaignRequest {
    const KIND: ContentKind = ContentKind::Campaign;
    const SECTIONS: &'static [&'static str] = &[
        "Strategy Overview",
        "Recommended Platform",
        "Content Ideas",
        "Ad Copy Variations",
        "CTA Suggestions",
    ];

    fn structured_prompt(&self, max_field_chars: usize) -> String {
        format!(
            "Create a marketing campaign for:\n\
             {details}\n\
             \n\
             {platform}\n\
             \n\
             Return a JSON object with strictly these keys:\n\
             \"Strategy Overview\": \"A brief 2-sentence strategy summary explaining the approach.\",\n\
             \"Recommended Platform\": \"The chosen platform and why.\",\n\
             \"Content Ideas\": [list of 3 creative ideas specific to the platform],\n\
             \"Ad Copy Variations\": [list of 3 ad copy texts matching the tone],\n\
             \"CTA Suggestions\": [list of 3 calls to action]",
            details = self.details(max_field_chars),
            platform = self.platform_instruction(),
        )
    }

    fn narrative_prompt(&self, max_field_chars: usize) -> String {
        format!(
            "Create a comprehensive marketing campaign for:\n\
             {details}\n\
             \n\
             {platform}\n\
             \n\
             Provide:\n\
             1. Campaign Strategy Overview\n\
             2. 3 Ad Copy Variations\n\
             3. Platform-Specific Recommendations\n\
             4. Key Messaging Points",
            details = self.details(max_field_chars),
            platform = self.platform_instruction(),
        )
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.product(), self.goal())
    }

    fn archive_fields(&self) -> Map<String, Value> {
        field_map([
            ("product", self.product()),
            ("audience", self.audience()),
            ("platform", self.platform()),
            ("goal", self.goal()),
            ("tone", self.tone()),
        ])
    }
}
