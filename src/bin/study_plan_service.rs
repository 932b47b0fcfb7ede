use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing::info;

use study_assistant_backend::config::StudyPlanServiceConfig;
use study_assistant_backend::routes;
use study_assistant_backend::services::llm::OpenAiChatModel;
use study_assistant_backend::state::StudyPlanState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = StudyPlanServiceConfig::from_env()?;
    let model = OpenAiChatModel::new(config.llm.clone())?;
    let state = Arc::new(StudyPlanState {
        model: Arc::new(model),
        notes_file: config.notes_file.clone(),
    });

    let cors = CorsLayer::very_permissive();
    let app = routes::study_plan_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        addr = %config.listen_addr,
        model = %config.llm.model,
        notes_file = %config.notes_file.display(),
        "study plan service listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
