use serde::{Deserialize, Serialize};

use crate::plugin::SearchBasicCond;
use crate::result::{SearchExtra, SearchObject};
use crate::types::ObjectType;

/// One matching object as reported by a backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    pub id: String,
    pub object_type: ObjectType,
}

/// A page of hits. `total` counts every match, not just this page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchPage {
    pub total: i64,
    pub hits: Vec<SearchHit>,
    pub extra: Option<SearchExtra>,
}

/// A pluggable search engine.
pub trait SearchBackend: Send + Sync {
    /// Searches questions and answers together.
    fn search_contents(&self, cond: &SearchBasicCond) -> anyhow::Result<SearchPage>;
    fn search_questions(&self, cond: &SearchBasicCond) -> anyhow::Result<SearchPage>;
    fn search_answers(&self, cond: &SearchBasicCond) -> anyhow::Result<SearchPage>;
}

/// Fills in the displayable object behind a hit. `Ok(None)` drops the hit.
pub trait ObjectLoader: Send + Sync {
    fn load(&self, hit: &SearchHit) -> anyhow::Result<Option<SearchObject>>;
}
