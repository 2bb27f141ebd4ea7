use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::dto::{ChatResponse, SendMessageRequest};
use crate::error::AppResult;
use crate::models::chat::Message;
use crate::seed;
use crate::AppState;

pub async fn get_chat(State(state): State<AppState>) -> Json<ChatResponse> {
    Json(ChatResponse {
        messages: state.chat.messages().await,
        is_typing: state.chat.is_typing(),
        selected_mood: state.chat.selected_mood().await,
        quick_starts: seed::QUICK_STARTS.to_vec(),
    })
}

/// Returns the user's message right away; the assistant reply arrives later
/// over `/ws` and in `GET /api/chat`.
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<SendMessageRequest>,
) -> AppResult<(StatusCode, Json<Message>)> {
    body.validate()?;

    // The reply task runs detached; it is never cancelled.
    let (message, _reply) = state
        .chat
        .send(body.content.as_deref().unwrap_or_default(), body.mood)
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}
