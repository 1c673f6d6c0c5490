use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_CATEGORY: &str = "training";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    pub id: u32,
    pub text: String,
    pub category: String,
    pub is_recorded: bool,
    pub recording_id: Option<u32>,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new phrase
#[derive(Debug, Clone)]
pub struct NewPhrase {
    pub text: String,
    pub category: String,
    pub difficulty: Difficulty,
}

/// Partial update; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct PhraseUpdate {
    pub text: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "Invalid difficulty '{}', expected easy, medium or hard",
                other
            )),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Training phrases offered on a fresh start
pub const DEFAULT_PHRASES: &[&str] = &[
    "The quick brown fox jumps over the lazy dog near the riverbank.",
    "The weather today is absolutely beautiful and perfect for a walk.",
    "Technology continues to advance at an unprecedented rate.",
    "Artificial intelligence is transforming how we communicate.",
    "I enjoy reading books and learning about different cultures.",
    "Communication is the foundation of all human relationships.",
    "Success comes from dedication, hard work, and perseverance.",
    "The ocean waves crash against the rocky shoreline.",
    "Music has the power to bring people together across cultures.",
    "Every challenge presents an opportunity for growth and learning.",
];
