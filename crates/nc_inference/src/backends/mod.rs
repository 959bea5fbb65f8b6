use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use nc_core::{Config, Error, Result, TextGenerator};

pub mod dummy;
pub mod gemini;
pub mod huggingface;
pub mod together;

pub use dummy::DummyBackend;
pub use gemini::GeminiBackend;
pub use huggingface::HuggingFaceBackend;
pub use together::TogetherBackend;

/// Which hosted provider to generate text with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Gemini,
    HuggingFace,
    Together,
    Dummy,
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(BackendKind::Gemini),
            "huggingface" | "hf" => Ok(BackendKind::HuggingFace),
            "together" => Ok(BackendKind::Together),
            "dummy" => Ok(BackendKind::Dummy),
            other => Err(format!("Unknown backend: {}", other)),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Gemini => write!(f, "gemini"),
            BackendKind::HuggingFace => write!(f, "huggingface"),
            BackendKind::Together => write!(f, "together"),
            BackendKind::Dummy => write!(f, "dummy"),
        }
    }
}

/// Build the backend for `kind`, taking its API key from `config`.
/// Fails with `Error::Config` when the provider's key is missing.
pub fn create_backend(kind: BackendKind, config: &Config) -> Result<Arc<dyn TextGenerator>> {
    match kind {
        BackendKind::Gemini => Ok(Arc::new(GeminiBackend::new(config.gemini_key.clone())?)),
        BackendKind::HuggingFace => {
            Ok(Arc::new(HuggingFaceBackend::new(config.hf_key.clone())?))
        }
        BackendKind::Together => Ok(Arc::new(TogetherBackend::new(config.together_key.clone())?)),
        BackendKind::Dummy => Ok(Arc::new(DummyBackend)),
    }
}

pub(crate) fn require_key(key: Option<String>, provider: &str) -> Result<String> {
    key.ok_or_else(|| Error::Config(format!("{} API key is required", provider)))
}
