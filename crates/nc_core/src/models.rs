use async_trait::async_trait;

use crate::types::{GenerationParams, NewsArticle, SearchHit};
use crate::Result;

/// A pluggable text-generation backend over one hosted LLM provider.
///
/// `generate` never fails: any transport or parsing problem is logged by the
/// implementation and degraded to a provider-specific sentinel string, so
/// callers always get displayable text back.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Stable identifier for the generation type, e.g. "together_ai"
    fn kind(&self) -> &str;

    /// Generate text for the prompt, or return a fallback sentinel string
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> String;
}

/// Fetches candidate articles for a topic from a news-search service
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn search_news(&self, topic: &str) -> Result<Vec<NewsArticle>>;
}

/// Runs a free-text query against a web-search service
#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>>;
}
