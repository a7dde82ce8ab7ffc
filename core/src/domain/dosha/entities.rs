use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::food::entities::FoodItem;

/// Constitutional body type used to personalise every verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Dosha {
    #[serde(alias = "vata", alias = "VATA")]
    Vata,
    #[serde(alias = "pitta", alias = "PITTA")]
    Pitta,
    #[serde(alias = "kapha", alias = "KAPHA")]
    Kapha,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown dosha '{0}', expected one of Vata, Pitta, Kapha")]
pub struct ParseDoshaError(pub String);

impl Dosha {
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }

    /// The food's affinity score for this dosha. Negative pacifies, positive aggravates.
    pub fn score_of(&self, food: &FoodItem) -> i32 {
        match self {
            Dosha::Vata => food.vata,
            Dosha::Pitta => food.pitta,
            Dosha::Kapha => food.kapha,
        }
    }

    /// Lenient parse for path and query parameters: unknown names become `None`.
    pub fn parse_lenient(value: &str) -> Option<Dosha> {
        value.parse().ok()
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dosha {
    type Err = ParseDoshaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Dosha::ALL
            .into_iter()
            .find(|dosha| dosha.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseDoshaError(s.to_string()))
    }
}
