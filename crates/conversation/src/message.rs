//! Message variants rendered in the conversation transcript.

use serde::{Deserialize, Serialize};

use crate::persona::PersonaId;

/// One selectable option in a [`Message::ChoiceSet`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A generated campaign visual.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreativeImage {
    pub url: String,
    pub caption: String,
}

/// One row in an analysis table (label, value, optional delta badge).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisItem {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
}

/// Per-channel line of the assembled campaign summary card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelPlan {
    pub name: String,
    pub budget: String,
    pub formats: String,
    pub audience: String,
}

/// The structured campaign launch package assembled by the personas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignSummary {
    pub name: String,
    pub objective: String,
    pub budget: String,
    pub channels: Vec<ChannelPlan>,
    pub headline: String,
    pub brand_score: u8,
    pub expected_roas: String,
    pub expected_conversions: String,
    pub images_generated: u32,
    pub agents_involved: Vec<String>,
}

/// Publishing state of a single platform in a live status list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PublishState {
    Pending,
    Publishing,
    Live,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformPublishState {
    pub platform: String,
    pub state: PublishState,
}

/// A transcript message. Tagged by `kind` on the wire so the presentation
/// layer can switch on it directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Message {
    /// The user's own text (free prompt or an echoed choice label).
    UserEcho { text: String },
    /// A persona speaking. Text is light markdown (bold, tables).
    PersonaText { persona: PersonaId, text: String },
    /// A set of buttons; the script pauses here until one is resolved.
    ChoiceSet { choices: Vec<Choice> },
    /// A grid of generated campaign visuals.
    ImageSet { images: Vec<CreativeImage> },
    /// The assembled campaign launch package.
    CampaignCard { campaign: CampaignSummary },
    /// Tabular research findings.
    AnalysisTable { title: String, items: Vec<AnalysisItem> },
    /// Live publishing progress. At most one of these is visible in the
    /// transcript: each new emission replaces the previous one in place.
    PublishingStatus { platforms: Vec<PlatformPublishState> },
}

impl Message {
    /// The persona attributed to this message, if any.
    pub fn persona(&self) -> Option<PersonaId> {
        match self {
            Message::PersonaText { persona, .. } => Some(*persona),
            _ => None,
        }
    }

    pub fn is_publishing_status(&self) -> bool {
        matches!(self, Message::PublishingStatus { .. })
    }

    pub fn is_choice_set(&self) -> bool {
        matches!(self, Message::ChoiceSet { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_tags_by_kind() {
        let msg = Message::PersonaText {
            persona: PersonaId::Maya,
            text: "Hello".to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["kind"], "persona_text");
        assert_eq!(json["persona"], "maya");
    }

    #[test]
    fn analysis_item_omits_empty_delta() {
        let item = AnalysisItem {
            label: "Best channel".to_string(),
            value: "Google Shopping".to_string(),
            delta: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("delta"));
    }

    #[test]
    fn publishing_status_is_detected() {
        let msg = Message::PublishingStatus { platforms: vec![] };
        assert!(msg.is_publishing_status());
        assert!(!msg.is_choice_set());
    }
}
