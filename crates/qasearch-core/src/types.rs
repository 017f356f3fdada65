//! Small closed value sets shared by requests, conditions and results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Kind of object a search hit refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Question,
    Answer,
}

impl ObjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Answer => "answer",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering accepted on the request boundary.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrder {
    Newest,
    Active,
    Score,
    #[default]
    Relevance,
}

impl SearchOrder {
    pub const ALL: [SearchOrder; 4] = [Self::Newest, Self::Active, Self::Score, Self::Relevance];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Active => "active",
            Self::Score => "score",
            Self::Relevance => "relevance",
        }
    }
}

impl FromStr for SearchOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownOrder(s.to_string()))
    }
}

impl fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which object kinds a condition searches.
///
/// `All` is the unscoped case and renders as the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SearchTarget {
    #[default]
    All,
    Question,
    Answer,
}

impl SearchTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Question => ObjectType::Question.as_str(),
            Self::Answer => ObjectType::Answer.as_str(),
        }
    }

    /// Parses the wire identifiers "", "question" and "answer".
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" => Some(Self::All),
            "question" => Some(Self::Question),
            "answer" => Some(Self::Answer),
            _ => None,
        }
    }
}

impl From<ObjectType> for SearchTarget {
    fn from(t: ObjectType) -> Self {
        match t {
            ObjectType::Question => Self::Question,
            ObjectType::Answer => Self::Answer,
        }
    }
}

impl Serialize for SearchTarget {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SearchTarget {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| {
            serde::de::Error::unknown_variant(&s, &["", "question", "answer"])
        })
    }
}
