//! Inbound search request and its validation.

use serde::{Deserialize, Serialize};

use crate::config::{SearchLimits, MAX_PAGE_SIZE, MAX_QUERY_CHARS};
use crate::error::ValidationError;
use crate::types::SearchOrder;

/// Search request as bound from the query string (`q`, `page`, `size`, `order`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "q")]
    pub query: String,

    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default, rename = "size")]
    pub page_size: Option<u32>,

    #[serde(default)]
    pub order: Option<String>,

    /// Requesting principal; filled from the session, never from the wire.
    #[serde(skip)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub captcha_id: Option<String>,

    #[serde(default)]
    pub captcha_code: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), ..Default::default() }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Validates against the default limits.
    pub fn validate(self) -> Result<ValidatedSearch, ValidationError> {
        self.validate_with(&SearchLimits::default())
    }

    pub fn validate_with(self, limits: &SearchLimits) -> Result<ValidatedSearch, ValidationError> {
        let result = self.check(limits);
        if let Err(ref e) = result {
            tracing::debug!(field = e.field(), error = %e, "search request rejected");
        }
        result
    }

    fn check(self, limits: &SearchLimits) -> Result<ValidatedSearch, ValidationError> {
        // Limits may tighten the ceilings but never widen them.
        let max_query_chars = limits.max_query_chars.min(MAX_QUERY_CHARS);
        let max_page_size = limits.max_page_size.min(MAX_PAGE_SIZE);

        let len = self.query.chars().count();
        if len == 0 {
            return Err(ValidationError::EmptyQuery);
        }
        if len > max_query_chars {
            return Err(ValidationError::QueryTooLong { len, max: max_query_chars });
        }

        let page = self.page.unwrap_or(1);
        if page < 1 {
            return Err(ValidationError::PageOutOfRange(page));
        }

        let page_size = self.page_size.unwrap_or(limits.default_page_size);
        if page_size < 1 || page_size > max_page_size {
            return Err(ValidationError::PageSizeOutOfRange { size: page_size, max: max_page_size });
        }

        let order = match self.order.as_deref() {
            None => SearchOrder::default(),
            Some(s) => s.parse()?,
        };

        Ok(ValidatedSearch {
            query: self.query,
            page,
            page_size,
            order,
            user_id: self.user_id.filter(|id| !id.is_empty()),
        })
    }
}

/// A request that passed every bound. Only [`SearchRequest::validate`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSearch {
    query: String,
    page: u32,
    page_size: u32,
    order: SearchOrder,
    user_id: Option<String>,
}

impl ValidatedSearch {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn order(&self) -> SearchOrder {
        self.order
    }

    /// `None` for anonymous requests.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let v = SearchRequest::new("rust").validate().expect("valid");
        assert_eq!(v.page(), 1);
        assert_eq!(v.page_size(), 30);
        assert_eq!(v.order(), SearchOrder::Relevance);
        assert_eq!(v.user_id(), None);
    }

    #[test]
    fn query_length_counts_characters() {
        let sixty = "é".repeat(60);
        assert!(SearchRequest::new(sixty).validate().is_ok());
        let err = SearchRequest::new("é".repeat(61)).validate().unwrap_err();
        assert_eq!(err, ValidationError::QueryTooLong { len: 61, max: 60 });
        assert_eq!(err.field(), "q");
    }

    #[test]
    fn empty_user_id_is_anonymous() {
        let v = SearchRequest::new("x").with_user("").validate().expect("valid");
        assert_eq!(v.user_id(), None);
    }
}
