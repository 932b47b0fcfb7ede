use std::io::ErrorKind;

use axum::{Json, extract::State};
use tracing::info;

use crate::{
    error::AppError,
    message::StudyPlanResponse,
    services::{markdown, study_plan},
    state::SharedStudyPlanState,
};

pub async fn generate_study_plan_handler(
    State(state): State<SharedStudyPlanState>,
) -> Result<Json<StudyPlanResponse>, AppError> {
    let notes = match tokio::fs::read_to_string(&state.notes_file).await {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AppError::NotFound(format!(
                "file not found: {}",
                state.notes_file.display()
            )));
        }
        Err(e) => return Err(e.into()),
    };

    let sections = markdown::split_by_headings(&notes, markdown::NOTES_HEADINGS);
    if sections.is_empty() {
        return Err(AppError::BadRequest(format!(
            "no sections found in {}: the notes file is empty or has no headings",
            state.notes_file.display()
        )));
    }
    info!(sections = sections.len(), "notes file split");

    let summary = study_plan::summarize_sections(state.model.as_ref(), &sections).await?;
    let plan = study_plan::generate_plan(state.model.as_ref(), &summary).await?;

    Ok(Json(StudyPlanResponse {
        plano_de_estudos: plan,
    }))
}
