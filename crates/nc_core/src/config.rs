use std::env;

/// API keys for the external services, read once at process start and passed
/// explicitly to each client constructor.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub newsapi_key: Option<String>,
    pub serper_key: Option<String>,
    pub gemini_key: Option<String>,
    pub hf_key: Option<String>,
    pub together_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            newsapi_key: env::var("NEWSAPI_KEY").ok(),
            serper_key: env::var("SERPER_API_KEY").ok(),
            gemini_key: env::var("GEMINI_API_KEY").ok(),
            hf_key: env::var("HF_API_KEY").ok(),
            together_key: env::var("TOGETHER_API_KEY").ok(),
        }
    }
}
