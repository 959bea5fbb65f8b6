use std::fmt;
use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use nc_core::{Result, SearchHit, WebSearch};

/// How many web results feed the follow-up prompt
pub const MAX_WEB_RESULTS: usize = 5;

#[derive(Serialize)]
struct SearchRequest {
    q: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<SearchHit>,
}

pub struct SearchClient {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl SearchClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url: "https://google.serper.dev".to_string(),
        }
    }

    async fn fetch(&self, query: &str) -> Result<Vec<SearchHit>> {
        let request = SearchRequest {
            q: query.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .header("X-API-KEY", self.api_key.as_str())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await?;

        tracing::info!(
            "🔍 Web search returned {} organic results for \"{}\"",
            response.organic.len(),
            query
        );
        Ok(response.organic)
    }
}

impl fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchClient")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait::async_trait]
impl WebSearch for SearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        self.fetch(query).await
    }
}

/// Format up to `limit` hits as numbered `title - snippet (link)` blocks,
/// separated by blank lines.
pub fn format_results(hits: &[SearchHit], limit: usize) -> String {
    hits.iter()
        .take(limit)
        .enumerate()
        .map(|(i, hit)| format!("{}. {} - {} ({})", i + 1, hit.title, hit.snippet, hit.link))
        .collect::<Vec<_>>()
        .join("\n\n")
}
