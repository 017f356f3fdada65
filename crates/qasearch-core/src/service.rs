//! Runs one search request end to end against a backend.

use crate::config::SearchLimits;
use crate::error::{Error, Result};
use crate::parser::QueryParser;
use crate::request::{SearchRequest, ValidatedSearch};
use crate::result::{SearchListResp, SearchResp};
use crate::traits::{ObjectLoader, SearchBackend, SearchPage};

pub struct SearchService<B, L>
where
    B: SearchBackend,
    L: ObjectLoader,
{
    backend: B,
    loader: L,
    parser: QueryParser,
    limits: SearchLimits,
}

impl<B, L> SearchService<B, L>
where
    B: SearchBackend,
    L: ObjectLoader,
{
    pub fn new(backend: B, loader: L) -> Self {
        Self { backend, loader, parser: QueryParser::new(), limits: SearchLimits::default() }
    }

    /// Installs tighter request limits, rejecting any that exceed the hard ceilings.
    pub fn with_limits(mut self, limits: SearchLimits) -> Result<Self> {
        limits.validate()?;
        self.limits = limits;
        Ok(self)
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    pub fn search(&self, request: SearchRequest) -> Result<SearchListResp> {
        let search = request.validate_with(&self.limits)?;
        self.search_validated(&search)
    }

    pub fn search_validated(&self, search: &ValidatedSearch) -> Result<SearchListResp> {
        let cond = self.parser.parse(search);
        let basic = cond.translate(search);

        let found = if cond.is_question_only() {
            self.backend.search_questions(&basic)
        } else if cond.is_answer_only() {
            self.backend.search_answers(&basic)
        } else {
            self.backend.search_contents(&basic)
        };
        let page = found.map_err(Error::Backend)?;

        let resp = self.assemble(page)?;
        tracing::info!(
            scope = cond.target.as_str(),
            page = search.page(),
            page_size = search.page_size(),
            total = resp.total,
            returned = resp.items.len(),
            "search executed"
        );
        Ok(resp)
    }

    fn assemble(&self, page: SearchPage) -> Result<SearchListResp> {
        let mut items = Vec::with_capacity(page.hits.len());
        for hit in &page.hits {
            match self.loader.load(hit).map_err(Error::Loader)? {
                Some(object) => items.push(SearchResp { object_type: hit.object_type, object }),
                None => tracing::debug!(id = %hit.id, kind = %hit.object_type, "search hit not found, skipping"),
            }
        }
        Ok(SearchListResp { total: page.total, items, extra: page.extra })
    }
}
