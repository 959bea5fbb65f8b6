use std::fmt;
use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use nc_core::{GenerationParams, Result, TextGenerator};

use super::require_key;

const MODEL_NAME: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";
const NO_OUTPUT: &str = "⚠️ No output from TogetherAI.";
const CALL_FAILED: &str = "⚠️ Error calling TogetherAI model.";

#[derive(Serialize)]
struct InferenceRequest {
    model: String,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    top_p: f32,
    stop: Vec<String>,
}

// The API has answered with both shapes in the wild; try `output` first,
// then `choices[0].text`.
#[derive(Deserialize)]
struct InferenceResponse {
    output: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    text: Option<String>,
}

pub struct TogetherBackend {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
}

impl TogetherBackend {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            client: Arc::new(Client::new()),
            api_key: require_key(api_key, "TogetherAI")?,
            base_url: "https://api.together.xyz".to_string(),
        })
    }

    async fn try_generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Option<String>> {
        let request = InferenceRequest {
            model: MODEL_NAME.to_string(),
            prompt: prompt.to_string(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_k: params.top_k,
            top_p: params.top_p,
            stop: params.stop.clone(),
        };

        let response = self
            .client
            .post(format!("{}/inference", self.base_url))
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

impl fmt::Debug for TogetherBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TogetherBackend")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn extract_text(response: &InferenceResponse) -> Option<String> {
    let from_output = response
        .output
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let from_choices = || {
        response
            .choices
            .first()
            .and_then(|c| c.text.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    };
    from_output
        .or_else(from_choices)
        .map(|t| t.to_string())
}

#[async_trait::async_trait]
impl TextGenerator for TogetherBackend {
    fn kind(&self) -> &str {
        "together_ai"
    }

    async fn generate(&self, prompt: &str, params: &GenerationParams) -> String {
        match self.try_generate(prompt, params).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::warn!("🔁 TogetherAI returned neither output nor choices");
                NO_OUTPUT.to_string()
            }
            Err(e) => {
                tracing::error!("🔥 TogetherLLM error: {}", e);
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
        assert!(TogetherBackend::new(None).is_err());
        assert!(TogetherBackend::new(Some("test-key".to_string())).is_ok());
    }

    #[test]
    fn test_extract_prefers_output_field() {
        let json = r#"{"output": " from output ", "choices": [{"text": "from choices"}]}"#;
        let response: InferenceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(extract_text(&response).unwrap(), "from output");
    }

    #[test]
    fn test_extract_falls_back_to_choices() {
        let json = r#"{"choices": [{"text": "- point one\n- point two"}]}"#;
        let response: InferenceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            extract_text(&response).unwrap(),
            "- point one\n- point two"
        );

        let json = r#"{"output": "   ", "choices": [{"text": "fallback"}]}"#;
        let response: InferenceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(extract_text(&response).unwrap(), "fallback");
    }

    #[test]
    fn test_extract_none_on_empty_shapes() {
        let response: InferenceResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_text(&response).is_none());

        let response: InferenceResponse =
            serde_json::from_str(r#"{"choices": [{"text": null}]}"#).unwrap();
        assert!(extract_text(&response).is_none());
    }

    #[test]
    fn test_request_omits_unset_top_k() {
        let request = InferenceRequest {
            model: MODEL_NAME.to_string(),
            prompt: "p".to_string(),
            max_tokens: 500,
            temperature: 0.4,
            top_k: None,
            top_p: 0.9,
            stop: vec!["</s>".to_string()],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("top_k"));

        let request = InferenceRequest {
            top_k: Some(40),
            ..request
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"top_k\":40"));
    }

    #[tokio::test]
    async fn test_generate_falls_back_on_transport_failure() {
        let mut backend = TogetherBackend::new(Some("test-key".to_string())).unwrap();
        backend.base_url = "http://127.0.0.1:9".to_string();
        let out = backend
            .generate("Summarize this.", &GenerationParams::default())
            .await;
        assert_eq!(out, CALL_FAILED);
    }
}
