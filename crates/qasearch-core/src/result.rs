//! Wire shape of search results.
//!
//! Objects are produced by an [`ObjectLoader`](crate::traits::ObjectLoader);
//! this module only fixes field names and nullability.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::types::ObjectType;

/// Author summary shown next to a hit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserBasicInfo {
    pub id: String,
    pub username: String,
    pub rank: i32,
    pub display_name: String,
    pub avatar: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagResp {
    #[serde(skip)]
    pub id: String,
    pub slug_name: String,
    pub display_name: String,
    /// Set when this tag is a synonym of another tag.
    #[serde(default)]
    pub main_tag_slug_name: Option<String>,
    pub recommend: bool,
    pub reserved: bool,
}

impl TagResp {
    pub fn is_synonym(&self) -> bool {
        self.main_tag_slug_name.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// A question or answer as displayed in a result list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchObject {
    pub id: String,
    /// Parent question; present for answers.
    #[serde(default)]
    pub question_id: Option<String>,
    pub title: String,
    pub excerpt: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    pub vote_count: i32,
    pub accepted: bool,
    pub answer_count: i32,
    #[serde(default)]
    pub user_info: Option<UserBasicInfo>,
    #[serde(default)]
    pub tags: Vec<TagResp>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResp {
    pub object_type: ObjectType,
    pub object: SearchObject,
}

/// Backend-defined payload attached to a result list (facets, timings, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SearchExtra(serde_json::Value);

impl SearchExtra {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn encode<T: Serialize>(value: &T) -> serde_json::Result<Self> {
        serde_json::to_value(value).map(Self)
    }

    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(&self.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchListResp {
    #[serde(rename = "count")]
    pub total: i64,
    #[serde(rename = "list")]
    pub items: Vec<SearchResp>,
    pub extra: Option<SearchExtra>,
}
