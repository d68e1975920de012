//! The relay handler: one request/response cycle per legal question.

use crate::dtos::{QueryRequest, QueryResponse};
use crate::services::formatting::render_html;
use crate::services::prompt;
use crate::services::providers::ProviderError;
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Answer returned when the question is missing or blank after trimming.
pub const INVALID_QUESTION_ANSWER: &str = "Please enter a valid question.";

/// Answer returned when the upstream response lacked the expected shape.
pub const NO_VALID_RESPONSE_ANSWER: &str = "No valid response from the AI service.";

/// `POST /query`.
///
/// Every failure path is absorbed into the answer text: this endpoint always
/// responds 200 with an `answer` string.
pub async fn query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Json<QueryResponse> {
    let question = request.question.trim();

    if question.is_empty() {
        return Json(QueryResponse {
            answer: INVALID_QUESTION_ANSWER.to_string(),
        });
    }

    tracing::debug!(question = %question, "Received legal question");

    let prompt = prompt::assemble(question);

    let answer = match state.provider.generate(&prompt).await {
        Ok(reply) => match reply.text {
            Some(text) => render_html(&text),
            None => NO_VALID_RESPONSE_ANSWER.to_string(),
        },
        Err(ProviderError::ApiError { status, body }) => {
            tracing::warn!(status = status, "Upstream API returned an error");
            format!("AI service error: {} - {}", status, body)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Upstream call failed");
            format!("Error: {}", e)
        }
    };

    tracing::debug!(answer_len = answer.len(), "Returning answer");

    Json(QueryResponse { answer })
}
