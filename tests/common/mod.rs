use std::sync::Mutex;

use async_trait::async_trait;

use study_assistant_backend::services::llm::{ChatMessage, ChatModel, LlmError};

enum Behavior {
    Reply(String),
    Fail(String),
}

/// Scripted stand-in for the provider client. Records every prompt it is
/// invoked with.
pub struct MockChatModel {
    behavior: Behavior,
    pub prompts: Mutex<Vec<String>>,
}

impl MockChatModel {
    pub fn replying(text: &str) -> Self {
        Self {
            behavior: Behavior::Reply(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            behavior: Behavior::Fail(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn invoke(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let prompt = messages
            .iter()
            .map(|m| m.content.clone())
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(prompt);

        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::Fail(message) => Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}
