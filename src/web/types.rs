// src/web/types.rs
// Request and response bodies for /api/generate-persona

use serde::{Deserialize, Serialize};

use crate::persona::{AnswerSet, PersonaRecord};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneratePersonaRequest {
    #[serde(default)]
    pub answers: Option<AnswerSet>,
    /// Data URL or bare base64
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CardColorBody {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePersonaResponse {
    pub persona_title: String,
    pub trait1: String,
    pub trait2: String,
    pub trait3: String,
    pub tagline: String,
    pub card_color: CardColorBody,
    pub avatar_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superhero_name: Option<String>,
}

impl GeneratePersonaResponse {
    pub fn new(persona: &PersonaRecord, avatar_url: String) -> Self {
        let [trait1, trait2, trait3] = persona.traits;
        Self {
            persona_title: persona.title.to_string(),
            trait1: trait1.to_string(),
            trait2: trait2.to_string(),
            trait3: trait3.to_string(),
            tagline: persona.tagline.to_string(),
            card_color: CardColorBody {
                start: persona.card_color.start.to_string(),
                end: persona.card_color.end.to_string(),
            },
            avatar_url,
            superhero_name: persona.superhero_name.map(str::to_string),
        }
    }
}
