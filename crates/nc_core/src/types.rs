use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One article as returned by the news-search API. Only the title and
/// description feed the digest; the rest is kept for logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// One organic web-search result used as grounding context in follow-ups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

/// Sampling settings forwarded to a text-generation backend. Backends that
/// take no parameters on the wire ignore these.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: Option<u32>,
    pub stop: Vec<String>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.4,
            top_p: 0.9,
            top_k: None,
            stop: vec!["</s>".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_deserializes_camel_case() {
        let json = r#"{
            "title": "AI policy shifts",
            "description": "Regulators move on AI policy.",
            "url": "https://example.com/a",
            "publishedAt": "2024-05-01T12:00:00Z"
        }"#;
        let article: NewsArticle = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "AI policy shifts");
        assert!(article.published_at.is_some());
    }

    #[test]
    fn test_article_tolerates_missing_fields() {
        let json = r#"{"title": "Bare", "description": null}"#;
        let article: NewsArticle = serde_json::from_str(json).unwrap();
        assert!(article.description.is_none());
        assert!(article.url.is_none());
        assert!(article.published_at.is_none());
    }

    #[test]
    fn test_default_params() {
        let params = GenerationParams::default();
        assert_eq!(params.max_tokens, 500);
        assert_eq!(params.stop, vec!["</s>".to_string()]);
        assert!(params.top_k.is_none());
    }
}
