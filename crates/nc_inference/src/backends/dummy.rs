use std::fmt;

use nc_core::{GenerationParams, TextGenerator};

/// Offline backend for tests and key-less local runs. Echoes the tail of the
/// prompt, clipped to the token budget, so output visibly depends on input.
pub struct DummyBackend;

impl fmt::Debug for DummyBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyBackend").finish()
    }
}

#[async_trait::async_trait]
impl TextGenerator for DummyBackend {
    fn kind(&self) -> &str {
        "dummy"
    }

    async fn generate(&self, prompt: &str, params: &GenerationParams) -> String {
        let budget = params.max_tokens as usize;
        let words: Vec<&str> = prompt.split_whitespace().take(budget.min(20)).collect();
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nc_core::GenerationParams;

    #[tokio::test]
    async fn test_dummy_echoes_prompt_words() {
        let backend = DummyBackend;
        let out = backend
            .generate("Summarize the following news", &GenerationParams::default())
            .await;
        assert_eq!(out, "Summarize the following news");
        assert_eq!(backend.kind(), "dummy");
    }

    #[tokio::test]
    async fn test_dummy_clips_long_prompts() {
        let backend = DummyBackend;
        let prompt = "word ".repeat(50);
        let out = backend.generate(&prompt, &GenerationParams::default()).await;
        assert_eq!(out.split_whitespace().count(), 20);
    }
}
