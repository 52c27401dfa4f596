//! Domain records shared by the store and the HTTP layer

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TriviaError};

/// Question identifier, assigned by the store
pub type QuestionId = i32;

/// Category identifier
pub type CategoryId = i32;

/// Category id the quiz client sends to mean "every category"
pub const ALL_CATEGORIES: i64 = 0;

/// A stored trivia question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// A question as submitted, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Attach the id the store assigned.
    pub fn with_id(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// A question category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub label: String,
}

/// Which questions a quiz round draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Only(CategoryId),
}

impl QuizCategory {
    /// Decode the raw id sent by the client; `0` selects every category.
    pub fn from_raw(raw: i64) -> Result<Self> {
        if raw == ALL_CATEGORIES {
            return Ok(Self::All);
        }
        to_id(raw).map(Self::Only)
    }
}

impl fmt::Display for QuizCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(id) => write!(f, "{}", id),
        }
    }
}

/// Integer that clients may send either as a JSON number or a numeric string.
///
/// The quiz front end posts `{"id": "1"}` for categories, so every id-like
/// field in request bodies goes through this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LooseInt(pub i64);

impl LooseInt {
    /// Narrow to a store id.
    pub fn to_id(self) -> Result<i32> {
        to_id(self.0)
    }
}

impl<'de> Deserialize<'de> for LooseInt {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Ok(Self(n)),
            Raw::Text(s) => s
                .trim()
                .parse()
                .map(Self)
                .map_err(|_| de::Error::custom(TriviaError::invalid_id(s))),
        }
    }
}

/// Parse a path segment into an id.
pub fn parse_id(raw: &str) -> Result<i32> {
    raw.trim()
        .parse()
        .map_err(|_| TriviaError::invalid_id(raw))
}

fn to_id(raw: i64) -> Result<i32> {
    i32::try_from(raw).map_err(|_| TriviaError::invalid_id(raw.to_string()))
}
