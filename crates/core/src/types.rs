//! Shared domain primitives used across management, analytics, and the
//! conversation engine.

use serde::{Deserialize, Serialize};

/// Advertising platforms the org can connect and publish to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Meta,
    Google,
    Tiktok,
    Linkedin,
    Pinterest,
    Twitter,
    Snapchat,
}

impl Platform {
    /// Human-readable platform name as shown in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Meta => "Meta",
            Platform::Google => "Google",
            Platform::Tiktok => "TikTok",
            Platform::Linkedin => "LinkedIn",
            Platform::Pinterest => "Pinterest",
            Platform::Twitter => "Twitter/X",
            Platform::Snapchat => "Snapchat",
        }
    }

    /// Brand accent colour (hex) for charts and badges.
    pub fn accent_color(&self) -> &'static str {
        match self {
            Platform::Meta => "#1877F2",
            Platform::Google => "#EA4335",
            Platform::Tiktok => "#000000",
            Platform::Linkedin => "#0A66C2",
            Platform::Pinterest => "#E60023",
            Platform::Twitter => "#1DA1F2",
            Platform::Snapchat => "#FFFC00",
        }
    }
}

/// Campaign objectives supported by the platform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    Awareness,
    Traffic,
    Engagement,
    Leads,
    Conversions,
    Sales,
    AppInstalls,
}

impl Objective {
    pub fn display_name(&self) -> &'static str {
        match self {
            Objective::Awareness => "Brand Awareness",
            Objective::Traffic => "Traffic",
            Objective::Engagement => "Engagement",
            Objective::Leads => "Lead Generation",
            Objective::Conversions => "Conversions",
            Objective::Sales => "Sales",
            Objective::AppInstalls => "App Installs",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_serializes_lowercase() {
        let json = serde_json::to_string(&Platform::Tiktok).unwrap();
        assert_eq!(json, "\"tiktok\"");
    }

    #[test]
    fn objective_round_trips() {
        let obj: Objective = serde_json::from_str("\"app_installs\"").unwrap();
        assert_eq!(obj, Objective::AppInstalls);
    }
}
