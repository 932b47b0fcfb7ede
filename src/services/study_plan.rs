// src/services/study_plan.rs
use tracing::{debug, info};

use crate::services::llm::{ChatMessage, ChatModel, LlmError};
use crate::services::markdown::Section;

const SUMMARY_PROMPT: &str = "Escreva um resumo conciso das anotações de estudo abaixo, \
preservando os tópicos e subtópicos citados:\n\n";

const PLAN_TEMPLATE: &str = "Você é um assistente de estudos. Com base no resumo de anotações \
abaixo, monte um plano de estudos com os tópicos ordenados do mais importante para o menos \
importante, com uma breve justificativa para cada um.\n\nResumo:\n{summary}";

/// Concatenates every section (header path included) into a single prompt and
/// summarizes it in one model call. There is no map-reduce fallback: input
/// larger than the model's context window surfaces as a provider error.
pub async fn summarize_sections(
    model: &dyn ChatModel,
    sections: &[Section],
) -> Result<String, LlmError> {
    let mut document = String::new();
    for section in sections {
        for (label, title) in &section.headers {
            document.push_str(label);
            document.push_str(": ");
            document.push_str(title);
            document.push('\n');
        }
        document.push_str(&section.content);
        document.push_str("\n\n");
    }

    info!(
        sections = sections.len(),
        document_len = document.len(),
        "summarizing notes"
    );
    let messages = [ChatMessage::user(format!("{SUMMARY_PROMPT}{document}"))];
    model.invoke(&messages).await
}

/// Fills the study-plan template with the summary and returns the plan text.
pub async fn generate_plan(model: &dyn ChatModel, summary: &str) -> Result<String, LlmError> {
    let prompt = PLAN_TEMPLATE.replace("{summary}", summary);
    debug!(prompt_len = prompt.len(), "study plan prompt built");
    let messages = [ChatMessage::user(prompt)];
    model.invoke(&messages).await
}
