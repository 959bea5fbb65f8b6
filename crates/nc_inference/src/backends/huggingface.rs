use std::fmt;
use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use nc_core::{GenerationParams, Result, TextGenerator};

use super::require_key;

const MODEL_PATH: &str = "models/facebook/bart-large-cnn";
const NO_OUTPUT: &str = "⚠️ No output from HuggingFace.";
const CALL_FAILED: &str = "⚠️ Error calling Hugging Face model.";

#[derive(Serialize)]
struct InferenceRequest {
    inputs: String,
}

// The inference API answers with either a summarization array or a plain
// generated-text object depending on the pipeline behind the model.
#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Summaries(Vec<Summary>),
    Generated { generated_text: Option<String> },
}

#[derive(Deserialize)]
struct Summary {
    summary_text: Option<String>,
}

pub struct HuggingFaceBackend {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl HuggingFaceBackend {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            client: Arc::new(Client::new()),
            api_key: require_key(api_key, "Hugging Face")?,
            base_url: "https://api-inference.huggingface.co".to_string(),
        })
    }

    async fn try_generate(&self, prompt: &str) -> Result<Option<String>> {
        let request = InferenceRequest {
            inputs: prompt.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/{}", self.base_url, MODEL_PATH))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<InferenceResponse>()
            .await?;

        Ok(extract_text(&response))
    }
}

impl fmt::Debug for HuggingFaceBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceBackend")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn extract_text(response: &InferenceResponse) -> Option<String> {
    let text = match response {
        InferenceResponse::Summaries(summaries) => {
            summaries.first()?.summary_text.as_deref()?
        }
        InferenceResponse::Generated { generated_text } => generated_text.as_deref()?,
    };
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[async_trait::async_trait]
impl TextGenerator for HuggingFaceBackend {
    fn kind(&self) -> &str {
        "huggingface_api"
    }

    // The hosted pipeline decides its own sampling
    async fn generate(&self, prompt: &str, _params: &GenerationParams) -> String {
        match self.try_generate(prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::warn!("🔁 HuggingFace returned no usable text");
                NO_OUTPUT.to_string()
            }
            Err(e) => {
                tracing::error!("🔥 HuggingFaceLLM error: {}", e);
                CALL_FAILED.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nc_core::GenerationParams;

    #[test]
    fn test_backend_requires_api_key() {
        assert!(HuggingFaceBackend::new(None).is_err());
        assert!(HuggingFaceBackend::new(Some("test-key".to_string())).is_ok());
    }

    #[test]
    fn test_extract_text_summary_array() {
        let json = r#"[{"summary_text": " Regulators moved on AI. "}]"#;
        let response: InferenceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(extract_text(&response).unwrap(), "Regulators moved on AI.");
    }

    #[test]
    fn test_extract_text_generated_object() {
        let json = r#"{"generated_text": "Some continuation."}"#;
        let response: InferenceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(extract_text(&response).unwrap(), "Some continuation.");
    }

    #[test]
    fn test_extract_text_empty_variants() {
        let response: InferenceResponse = serde_json::from_str("[]").unwrap();
        assert!(extract_text(&response).is_none());

        let response: InferenceResponse =
            serde_json::from_str(r#"{"generated_text": null}"#).unwrap();
        assert!(extract_text(&response).is_none());
    }

    #[tokio::test]
    async fn test_generate_falls_back_on_transport_failure() {
        let mut backend = HuggingFaceBackend::new(Some("test-key".to_string())).unwrap();
        backend.base_url = "http://127.0.0.1:9".to_string();
        let out = backend
            .generate("Summarize this.", &GenerationParams::default())
            .await;
        assert_eq!(out, CALL_FAILED);
    }
}
