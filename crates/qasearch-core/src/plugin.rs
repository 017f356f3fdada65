//! Backend-neutral search contract handed to pluggable search engines.
//!
//! A backend receives a [`SearchBasicCond`] through the
//! [`SearchBackend`](crate::traits::SearchBackend) trait and never sees the
//! request or condition types that produced it.

use serde::{Deserialize, Serialize};

use crate::types::SearchOrder;

/// General acceptance filter for backends that store a single tri-state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AcceptedCond {
    #[default]
    All,
    True,
    False,
}

/// Acceptance filter over answers: no filter, or accepted answers only.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AnswerAcceptedCond {
    #[default]
    All,
    True,
}

impl AnswerAcceptedCond {
    pub fn from_accepted(accepted: bool) -> Self {
        if accepted {
            Self::True
        } else {
            Self::All
        }
    }
}

impl From<AnswerAcceptedCond> for AcceptedCond {
    fn from(c: AnswerAcceptedCond) -> Self {
        match c {
            AnswerAcceptedCond::All => Self::All,
            AnswerAcceptedCond::True => Self::True,
        }
    }
}

/// Acceptance filter over questions: no filter, or questions lacking an accepted answer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum QuestionAcceptedCond {
    #[default]
    All,
    False,
}

impl QuestionAcceptedCond {
    pub fn from_not_accepted(not_accepted: bool) -> Self {
        if not_accepted {
            Self::False
        } else {
            Self::All
        }
    }
}

impl From<QuestionAcceptedCond> for AcceptedCond {
    fn from(c: QuestionAcceptedCond) -> Self {
        match c {
            QuestionAcceptedCond::All => Self::All,
            QuestionAcceptedCond::False => Self::False,
        }
    }
}

/// Ordering as understood by backends.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrderCond {
    Newest,
    Active,
    Score,
    #[default]
    Relevance,
}

impl From<SearchOrder> for SearchOrderCond {
    fn from(o: SearchOrder) -> Self {
        match o {
            SearchOrder::Newest => Self::Newest,
            SearchOrder::Active => Self::Active,
            SearchOrder::Score => Self::Score,
            SearchOrder::Relevance => Self::Relevance,
        }
    }
}

/// The translated query every backend accepts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchBasicCond {
    pub page: u32,
    pub page_size: u32,
    pub words: Vec<String>,
    pub tag_ids: Vec<String>,
    pub user_id: Option<String>,
    pub order: SearchOrderCond,
    pub question_id: Option<String>,
    pub vote_amount: u32,
    pub view_amount: u32,
    pub answer_amount: u32,
    pub answer_accepted: AnswerAcceptedCond,
    pub question_accepted: QuestionAcceptedCond,
}

impl SearchBasicCond {
    /// Zero-based offset of the first hit on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }
}
