use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing::info;

use study_assistant_backend::config::ChatServiceConfig;
use study_assistant_backend::routes;
use study_assistant_backend::services::llm::OpenAiChatModel;
use study_assistant_backend::state::ChatState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = ChatServiceConfig::from_env()?;
    let model = OpenAiChatModel::new(config.llm.clone())?;
    let state = Arc::new(ChatState {
        model: Arc::new(model),
    });

    let cors = CorsLayer::very_permissive();
    let app = routes::chat_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, model = %config.llm.model, "chat service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
