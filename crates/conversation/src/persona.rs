//! The eight studio personas that front the scripted conversation.

use serde::{Deserialize, Serialize};

/// Identifier for a studio persona.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PersonaId {
    Maya,
    Alex,
    Luna,
    Sam,
    Aria,
    Max,
    Nova,
    Kai,
}

/// Display profile for a persona, consumed by the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct Persona {
    pub id: PersonaId,
    pub name: &'static str,
    pub role: &'static str,
    /// Accent colour for the avatar badge.
    pub accent_color: &'static str,
}

impl PersonaId {
    pub const ALL: [PersonaId; 8] = [
        PersonaId::Maya,
        PersonaId::Alex,
        PersonaId::Luna,
        PersonaId::Sam,
        PersonaId::Aria,
        PersonaId::Max,
        PersonaId::Nova,
        PersonaId::Kai,
    ];

    pub fn profile(self) -> Persona {
        match self {
            PersonaId::Maya => Persona {
                id: self,
                name: "Maya",
                role: "Chief Strategist",
                accent_color: "#A855F7",
            },
            PersonaId::Alex => Persona {
                id: self,
                name: "Alex",
                role: "Media Planner",
                accent_color: "#3B82F6",
            },
            PersonaId::Luna => Persona {
                id: self,
                name: "Luna",
                role: "Creative Director",
                accent_color: "#EC4899",
            },
            PersonaId::Sam => Persona {
                id: self,
                name: "Sam",
                role: "Copywriter",
                accent_color: "#F59E0B",
            },
            PersonaId::Aria => Persona {
                id: self,
                name: "Aria",
                role: "Art Director",
                accent_color: "#F43F5E",
            },
            PersonaId::Max => Persona {
                id: self,
                name: "Max",
                role: "Data Analyst",
                accent_color: "#10B981",
            },
            PersonaId::Nova => Persona {
                id: self,
                name: "Nova",
                role: "Research Analyst",
                accent_color: "#06B6D4",
            },
            PersonaId::Kai => Persona {
                id: self,
                name: "Kai",
                role: "Brand Guardian",
                accent_color: "#F97316",
            },
        }
    }

    pub fn display_name(self) -> &'static str {
        self.profile().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_personas_have_distinct_names() {
        let mut names: Vec<&str> = PersonaId::ALL.iter().map(|p| p.display_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PersonaId::ALL.len());
    }

    #[test]
    fn persona_id_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PersonaId::Nova).unwrap(), "\"nova\"");
    }
}
