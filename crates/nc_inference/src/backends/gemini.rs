use std::fmt;
use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use nc_core::{GenerationParams, Result, TextGenerator};

use super::require_key;

const MODEL_NAME: &str = "models/gemini-2.5-flash";
const NO_OUTPUT: &str = "⚠️ No output from Gemini.";
const CALL_FAILED: &str = "⚠️ Error calling Gemini model.";

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

pub struct GeminiBackend {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl GeminiBackend {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            client: Arc::new(Client::new()),
            api_key: require_key(api_key, "Gemini")?,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        })
    }

    async fn try_generate(&self, prompt: &str) -> Result<Option<String>> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(format!(
                "{}/{}:generateContent",
                self.base_url, MODEL_NAME
            ))
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateResponse>()
            .await?;

        Ok(extract_text(&response))
    }
}

impl fmt::Debug for GeminiBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiBackend")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

// The provider nests the text four levels deep; any missing link in the
// chain counts as "no output".
fn extract_text(response: &GenerateResponse) -> Option<String> {
    let text = response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?
        .text
        .as_deref()?
        .trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiBackend {
    fn kind(&self) -> &str {
        "google_gemini"
    }

    // Gemini takes no sampling parameters on this endpoint
    async fn generate(&self, prompt: &str, _params: &GenerationParams) -> String {
        match self.try_generate(prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::warn!("🔁 Gemini returned an empty candidate list");
                NO_OUTPUT.to_string()
            }
            Err(e) => {
                tracing::error!("🔥 Gemini error: {}", e);
                CALL_FAILED.to_string()
            }
        }
    }
}
