// src/state.rs
use std::path::PathBuf;
use std::sync::Arc;

use crate::services::llm::ChatModel;

pub type SharedChatState = Arc<ChatState>;
pub type SharedStudyPlanState = Arc<StudyPlanState>;

/// Read-only after startup; the model client is built once and shared.
pub struct ChatState {
    pub model: Arc<dyn ChatModel>,
}

pub struct StudyPlanState {
    pub model: Arc<dyn ChatModel>,
    pub notes_file: PathBuf,
}
