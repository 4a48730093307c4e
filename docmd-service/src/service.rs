use std::time::Duration;

use docmd_converters_core::{Converter, Options, Rendered};
use docmd_converters_markdown::Processor;

use crate::{DocumentSource, Error, ResultCache, cache::DEFAULT_MAX_AGE, id::document_id};

/// Fetches documents, converts them to Markdown and caches the result.
///
/// Every conversion runs with its own rendering state, so a `Service` can be
/// shared between threads as long as its source can.
#[derive(Debug)]
pub struct Service<S> {
    source: S,
    cache: ResultCache,
    processor: Processor,
}

impl<S: DocumentSource> Service<S> {
    #[must_use]
    pub fn new(source: S, options: Options) -> Self {
        Self {
            source,
            cache: ResultCache::new(DEFAULT_MAX_AGE),
            processor: Processor::new(options),
        }
    }

    /// Replace the cache with an empty one using `max_age` as freshness window.
    #[must_use]
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.cache = ResultCache::new(max_age);
        self
    }

    #[must_use]
    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Render the document `id`, serving a fresh cached result when there is one.
    ///
    /// # Errors
    ///
    /// Returns the source's error unchanged if fetching fails, or a
    /// conversion error.
    #[tracing::instrument(skip(self))]
    pub fn render(&self, id: &str) -> Result<Rendered, Error> {
        if let Some(hit) = self.cache.get_fresh(id) {
            tracing::debug!("serving cached result");
            return Ok(hit.to_rendered());
        }
        let doc = self.source.fetch(id)?;
        let rendered = self.processor.convert(&doc)?;
        let evicted = self.cache.evict_stale();
        if evicted > 0 {
            tracing::debug!(evicted, "dropped stale cache entries");
        }
        self.cache.insert(id, &rendered);
        tracing::info!(title = %rendered.title, "rendered document");
        Ok(rendered)
    }

    /// Like [`Service::render`], accepting a bare identifier or a document URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if no identifier can be extracted.
    pub fn render_input(&self, input: &str) -> Result<Rendered, Error> {
        let id = document_id(input).ok_or_else(|| Error::InvalidIdentifier(input.to_string()))?;
        self.render(&id)
    }
}
