// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_NOTES_FILE: &str = "anotacoes.md";

const CHAT_MODEL: &str = "gpt-4";
const CHAT_TEMPERATURE: f32 = 0.7;
const CHAT_DEFAULT_PORT: u16 = 3000;

const STUDY_PLAN_MODEL: &str = "gpt-4o-mini";
const STUDY_PLAN_TEMPERATURE: f32 = 0.3;
const STUDY_PLAN_DEFAULT_PORT: u16 = 3001;

/// Provider settings fixed at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
}

impl LlmSettings {
    fn from_env(model: &str, temperature: f32) -> Result<Self> {
        // Missing credentials abort startup instead of surfacing as an auth
        // failure on the first provider call.
        let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set")?;
        let base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            api_key,
            base_url,
            model: model.to_string(),
            temperature,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ChatServiceConfig {
    pub listen_addr: SocketAddr,
    pub llm: LlmSettings,
}

impl ChatServiceConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            listen_addr: listen_addr(CHAT_DEFAULT_PORT)?,
            llm: LlmSettings::from_env(CHAT_MODEL, CHAT_TEMPERATURE)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct StudyPlanServiceConfig {
    pub listen_addr: SocketAddr,
    pub notes_file: PathBuf,
    pub llm: LlmSettings,
}

impl StudyPlanServiceConfig {
    pub fn from_env() -> Result<Self> {
        let notes_file =
            env::var("NOTES_FILE").unwrap_or_else(|_| DEFAULT_NOTES_FILE.to_string());
        Ok(Self {
            listen_addr: listen_addr(STUDY_PLAN_DEFAULT_PORT)?,
            notes_file: PathBuf::from(notes_file),
            llm: LlmSettings::from_env(STUDY_PLAN_MODEL, STUDY_PLAN_TEMPERATURE)?,
        })
    }
}

fn listen_addr(default_port: u16) -> Result<SocketAddr> {
    let port = match env::var("PORT") {
        Ok(value) => value.parse().context("PORT is not a valid port number")?,
        Err(_) => default_port,
    };
    Ok(SocketAddr::from(([0, 0, 0, 0], port)))
}
