//! Normalized search condition and its translation into the backend contract.

use serde::{Deserialize, Serialize};

use crate::plugin::{AnswerAcceptedCond, QuestionAcceptedCond, SearchBasicCond};
use crate::request::ValidatedSearch;
use crate::types::{SearchOrder, SearchTarget};

/// Filters derived from one search request, independent of any backend.
///
/// `accepted` and `not_accepted` are independent; setting both is allowed and
/// each is translated on its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchCondition {
    pub target: SearchTarget,
    pub user_id: Option<String>,
    pub question_id: Option<String>,
    pub tags: Vec<String>,
    pub words: Vec<String>,
    pub vote_amount: u32,
    pub views: u32,
    pub answer_amount: u32,
    pub accepted: bool,
    pub not_accepted: bool,
}

impl SearchCondition {
    pub fn is_unscoped(&self) -> bool {
        self.target == SearchTarget::All
    }

    pub fn is_question_only(&self) -> bool {
        self.target == SearchTarget::Question
    }

    pub fn is_answer_only(&self) -> bool {
        self.target == SearchTarget::Answer
    }

    /// Adds a tag unless already present, keeping first-seen order.
    pub fn push_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Translates using the pagination and order of a validated request.
    pub fn translate(&self, search: &ValidatedSearch) -> SearchBasicCond {
        self.to_plugin_cond(search.page(), search.page_size(), search.order())
    }

    pub fn to_plugin_cond(&self, page: u32, page_size: u32, order: SearchOrder) -> SearchBasicCond {
        let cond = SearchBasicCond {
            page,
            page_size,
            words: self.words.clone(),
            tag_ids: self.tags.clone(),
            user_id: self.user_id.clone(),
            order: order.into(),
            question_id: self.question_id.clone(),
            vote_amount: self.vote_amount,
            view_amount: self.views,
            answer_amount: self.answer_amount,
            answer_accepted: AnswerAcceptedCond::from_accepted(self.accepted),
            question_accepted: QuestionAcceptedCond::from_not_accepted(self.not_accepted),
        };
        tracing::debug!(
            target_type = self.target.as_str(),
            page,
            page_size,
            words = cond.words.len(),
            tags = cond.tag_ids.len(),
            "translated search condition"
        );
        cond
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_tag_dedups_in_order() {
        let mut c = SearchCondition::default();
        for t in ["go", "rust", "go", "concurrency"] {
            c.push_tag(t);
        }
        assert_eq!(c.tags, vec!["go", "rust", "concurrency"]);
    }

    #[test]
    fn views_map_to_view_amount() {
        let c = SearchCondition { views: 7, ..Default::default() };
        assert_eq!(c.to_plugin_cond(1, 30, SearchOrder::Score).view_amount, 7);
    }
}
