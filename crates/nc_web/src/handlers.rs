use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use nc_core::GenerationParams;
use nc_search::news::{filter_relevant, format_digest, no_matches, MAX_DIGEST_ARTICLES};
use nc_search::web::{format_results, MAX_WEB_RESULTS};

use crate::prompts::{followup_prompt, summarize_prompt};
use crate::AppState;

const SUMMARIZE_FAILED: &str = "⚠️ Error summarizing news.";
const FOLLOWUP_FAILED: &str = "Error generating answer.";
const NO_WEB_RESULTS: &str = "No relevant web results found.";

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub topic: String,
}

#[derive(Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Deserialize)]
pub struct FollowupRequest {
    pub summary: String,
    pub question: String,
}

#[derive(Serialize, Deserialize)]
pub struct FollowupResponse {
    pub answer: String,
}

fn followup_params() -> GenerationParams {
    GenerationParams {
        max_tokens: 400,
        temperature: 0.5,
        top_k: Some(40),
        ..GenerationParams::default()
    }
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeRequest>,
) -> (StatusCode, Json<SummarizeResponse>) {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(SummarizeResponse {
                summary: "Topic must not be empty.".to_string(),
            }),
        );
    }

    let articles = match state.news.search_news(topic).await {
        Ok(articles) => articles,
        Err(e) => {
            tracing::error!("❌ Error summarizing: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SummarizeResponse {
                    summary: SUMMARIZE_FAILED.to_string(),
                }),
            );
        }
    };

    let relevant = filter_relevant(&articles, topic);
    if relevant.is_empty() {
        // Nothing worth summarizing; skip the backend entirely
        return (
            StatusCode::OK,
            Json(SummarizeResponse {
                summary: no_matches(topic),
            }),
        );
    }

    let digest = format_digest(&relevant, MAX_DIGEST_ARTICLES);
    let prompt = summarize_prompt(topic, &digest);
    tracing::info!(
        "🧠 Summarizing {} articles with {}",
        relevant.len().min(MAX_DIGEST_ARTICLES),
        state.generator.kind()
    );
    let summary = state
        .generator
        .generate(&prompt, &GenerationParams::default())
        .await;

    (StatusCode::OK, Json(SummarizeResponse { summary }))
}

pub async fn followup(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FollowupRequest>,
) -> (StatusCode, Json<FollowupResponse>) {
    let hits = match state.search.search(&request.question).await {
        Ok(hits) => hits,
        Err(e) => {
            tracing::error!("❌ Follow-up error: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FollowupResponse {
                    answer: FOLLOWUP_FAILED.to_string(),
                }),
            );
        }
    };

    if hits.is_empty() {
        return (
            StatusCode::OK,
            Json(FollowupResponse {
                answer: NO_WEB_RESULTS.to_string(),
            }),
        );
    }

    let web_context = format_results(&hits, MAX_WEB_RESULTS);
    let prompt = followup_prompt(&request.question, &web_context, &request.summary);
    let answer = state.generator.generate(&prompt, &followup_params()).await;

    (StatusCode::OK, Json(FollowupResponse { answer }))
}
