// src/routes/mod.rs
pub mod chat;
pub mod study_plan;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::{SharedChatState, SharedStudyPlanState};

pub fn chat_router() -> Router<SharedChatState> {
    Router::new()
        .route("/chat", post(chat::chat_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}

pub fn study_plan_router() -> Router<SharedStudyPlanState> {
    Router::new()
        .route(
            "/gerar-plano-de-estudos",
            post(study_plan::generate_study_plan_handler),
        )
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
