use std::fmt;
use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;

use nc_core::{NewsArticle, NewsSource, Result};

/// How many candidate articles to request per topic
const PAGE_SIZE: usize = 20;
/// How many articles make it into the digest
pub const MAX_DIGEST_ARTICLES: usize = 5;

#[derive(Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<NewsArticle>,
}

pub struct NewsClient {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl NewsClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url: "https://newsapi.org".to_string(),
        }
    }

    async fn fetch(&self, topic: &str) -> Result<Vec<NewsArticle>> {
        let page_size = PAGE_SIZE.to_string();
        let response = self
            .client
            .get(format!("{}/v2/everything", self.base_url))
            .query(&[
                ("q", topic),
                ("language", "en"),
                ("pageSize", page_size.as_str()),
                ("sortBy", "publishedAt"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<EverythingResponse>()
            .await?;

        tracing::info!(
            "📰 News fetched: {} candidate articles for \"{}\"",
            response.articles.len(),
            topic
        );
        Ok(response.articles)
    }
}

impl fmt::Debug for NewsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsClient")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait::async_trait]
impl NewsSource for NewsClient {
    async fn search_news(&self, topic: &str) -> Result<Vec<NewsArticle>> {
        self.fetch(topic).await
    }
}

/// Keep only articles whose title or description mentions the topic,
/// case-insensitively. The news API matches loosely; this narrows the digest
/// to articles that are actually about the topic.
pub fn filter_relevant(articles: &[NewsArticle], topic: &str) -> Vec<NewsArticle> {
    let needle = topic.to_lowercase();
    articles
        .iter()
        .filter(|a| {
            a.title.to_lowercase().contains(&needle)
                || a.description
                    .as_deref()
                    .map(|d| d.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Format up to `limit` articles as a numbered plain-text digest:
/// `1. Title - Description` per line.
pub fn format_digest(articles: &[NewsArticle], limit: usize) -> String {
    articles
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, a)| {
            format!(
                "{}. {} - {}",
                i + 1,
                a.title,
                a.description.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fixed sentinel for a topic the filter matched nothing against
pub fn no_matches(topic: &str) -> String {
    format!("No strong matches found for \"{}\".", topic)
}
