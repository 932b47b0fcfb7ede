use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::llm::ChatMessage,
    state::SharedChatState,
};

pub async fn chat_handler(
    State(state): State<SharedChatState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    // Single-turn conversation: the raw message becomes the only user turn.
    let messages = [ChatMessage::user(payload.message)];
    let response = state.model.invoke(&messages).await?;
    Ok(Json(ChatResponse { response }))
}
