//! Derives a [`SearchCondition`] from the free-text query.
//!
//! Supported syntax:
//! - tags: `[go]`
//! - author: `user:alice`, `user:me` (the requesting user)
//! - thresholds: `score:3`, `answers:0`, `views:100`
//! - scope: `is:question`, `is:answer`
//! - acceptance: `isaccepted:yes`, `isaccepted:no`
//! - answers of one question: `inquestion:42`
//! - phrases: `"exact words"`
//!
//! Every other token becomes a search word. A token whose value does not parse
//! (e.g. `score:many`) is kept as a word as well.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::condition::SearchCondition;
use crate::request::ValidatedSearch;
use crate::types::SearchTarget;

// A quoted phrase or a run of non-whitespace.
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)"|(\S+)"#).expect("token pattern is valid"));

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\[\]]+)\]$").expect("tag pattern is valid"));

const SELF_USER: &str = "me";

#[derive(Debug, Default, Clone, Copy)]
pub struct QueryParser;

impl QueryParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, search: &ValidatedSearch) -> SearchCondition {
        self.parse_query(search.query(), search.user_id())
    }

    /// Parses `query` on behalf of `user_id` (`None` when anonymous).
    pub fn parse_query(&self, query: &str, user_id: Option<&str>) -> SearchCondition {
        let mut cond = SearchCondition::default();

        for cap in TOKEN_PATTERN.captures_iter(query) {
            if let Some(phrase) = cap.get(1) {
                let phrase = phrase.as_str().trim();
                if !phrase.is_empty() {
                    cond.words.push(phrase.to_string());
                }
                continue;
            }
            let Some(token) = cap.get(2).map(|m| m.as_str()) else {
                continue;
            };
            if !apply_token(&mut cond, token, user_id) {
                cond.words.push(token.to_string());
            }
        }

        tracing::debug!(
            target_type = cond.target.as_str(),
            words = ?cond.words,
            tags = ?cond.tags,
            "parsed search query"
        );
        cond
    }
}

/// Applies one structured token. Returns false when `token` is a plain word.
fn apply_token(cond: &mut SearchCondition, token: &str, user_id: Option<&str>) -> bool {
    if let Some(tag) = TAG_PATTERN.captures(token).and_then(|c| c.get(1)) {
        let tag = tag.as_str().trim();
        if tag.is_empty() {
            return false;
        }
        cond.push_tag(tag);
        return true;
    }

    let Some((key, value)) = token.split_once(':') else {
        return false;
    };
    if value.is_empty() {
        return false;
    }

    match key.to_ascii_lowercase().as_str() {
        "user" => {
            if value.eq_ignore_ascii_case(SELF_USER) {
                match user_id {
                    Some(id) => cond.user_id = Some(id.to_string()),
                    None => tracing::debug!("ignoring user:me for anonymous search"),
                }
            } else {
                cond.user_id = Some(value.to_string());
            }
            true
        }
        "score" => set_amount(&mut cond.vote_amount, value),
        "answers" => {
            let ok = set_amount(&mut cond.answer_amount, value);
            if ok {
                cond.target = SearchTarget::Question;
            }
            ok
        }
        "views" => {
            let ok = set_amount(&mut cond.views, value);
            if ok {
                cond.target = SearchTarget::Question;
            }
            ok
        }
        "is" => match value.to_ascii_lowercase().as_str() {
            "question" => {
                cond.target = SearchTarget::Question;
                true
            }
            "answer" => {
                cond.target = SearchTarget::Answer;
                true
            }
            _ => false,
        },
        "isaccepted" => match value.to_ascii_lowercase().as_str() {
            "yes" => {
                cond.accepted = true;
                cond.target = SearchTarget::Answer;
                true
            }
            "no" => {
                cond.not_accepted = true;
                cond.target = SearchTarget::Question;
                true
            }
            _ => false,
        },
        "inquestion" => {
            cond.question_id = Some(value.to_string());
            cond.target = SearchTarget::Answer;
            true
        }
        _ => false,
    }
}

fn set_amount(slot: &mut u32, value: &str) -> bool {
    match value.parse::<u32>() {
        Ok(n) => {
            *slot = n;
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_words_keep_order() {
        let c = QueryParser::new().parse_query("golang  channels select", None);
        assert_eq!(c.words, vec!["golang", "channels", "select"]);
        assert!(c.is_unscoped());
    }

    #[test]
    fn quoted_phrase_is_one_word() {
        let c = QueryParser::new().parse_query(r#"deadlock "unbuffered channel" go"#, None);
        assert_eq!(c.words, vec!["deadlock", "unbuffered channel", "go"]);
    }

    #[test]
    fn bad_number_stays_a_word() {
        let c = QueryParser::new().parse_query("score:lots", None);
        assert_eq!(c.vote_amount, 0);
        assert_eq!(c.words, vec!["score:lots"]);
    }

    #[test]
    fn user_me_needs_a_user() {
        let anon = QueryParser::new().parse_query("user:me", None);
        assert_eq!(anon.user_id, None);
        let signed = QueryParser::new().parse_query("user:me", Some("u-1"));
        assert_eq!(signed.user_id.as_deref(), Some("u-1"));
    }
}
