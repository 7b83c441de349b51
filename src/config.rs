#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::sync::{Arc, Mutex, OnceLock};

use crate::scoring::ScoringPrompts;

/// Default OpenAI-compatible endpoint: the Gemini compatibility surface that
/// the hosted grader runs against.
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Default model identifier for scoring requests.
const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Scoring-service credentials and optional tuning parameters sourced from
/// the environment.
#[derive(Clone)]
pub struct OpenAiEnv {
    /// Base URL for the OpenAI-compatible API endpoint.
    api_base:    String,
    /// API key used to authenticate scoring requests.
    api_key:     String,
    /// Model identifier for chat completions.
    model:       String,
    /// Optional temperature override, if provided.
    temperature: Option<f32>,
    /// Optional top-p override, if provided.
    top_p:       Option<f32>,
}

impl OpenAiEnv {
    /// Construct an `OpenAiEnv` from environment variables; returns `None`
    /// when the scoring credential is missing.
    fn from_env() -> Option<Self> {
        let api_key = std::env::var("LUMINA_API_KEY").ok()?.trim().to_owned();
        if api_key.is_empty() {
            return None;
        }

        let api_base = read_env_or("LUMINA_ENDPOINT", DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();
        let model = read_env_or("LUMINA_MODEL", DEFAULT_MODEL);

        let temperature = std::env::var("LUMINA_TEMPERATURE")
            .ok()
            .and_then(|s| s.parse::<f32>().ok());
        let top_p = std::env::var("LUMINA_TOP_P")
            .ok()
            .and_then(|s| s.parse::<f32>().ok());

        Some(Self {
            api_base,
            api_key,
            model,
            temperature,
            top_p,
        })
    }

    /// Returns the API base URL used for scoring requests.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the API key used for scoring requests.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the configured temperature, if any.
    pub fn temperature(&self) -> Option<f32> {
        self.temperature
    }

    /// Returns the configured top_p, if any.
    pub fn top_p(&self) -> Option<f32> {
        self.top_p
    }
}

/// Runtime and prompt configuration shared across the crate.
pub struct ConfigState {
    /// Scoring-service configuration, if the credential is present.
    openai:  Option<OpenAiEnv>,
    /// Prompt templates embedded in the binary.
    prompts: ScoringPrompts,
}

impl ConfigState {
    /// Construct a new configuration instance by reading environment and
    /// prompt assets.
    fn new() -> Self {
        Self {
            openai:  OpenAiEnv::from_env(),
            prompts: ScoringPrompts::load(),
        }
    }

    /// Returns the scoring-service configuration, if the credential is
    /// present.
    pub fn openai(&self) -> Option<&OpenAiEnv> {
        self.openai.as_ref()
    }

    /// Returns the prompt bundle.
    pub fn prompts(&self) -> &ScoringPrompts {
        &self.prompts
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<ConfigState>>>> = OnceLock::new();

/// Returns the mutex guarding the global configuration slot.
fn slot() -> &'static Mutex<Option<Arc<ConfigState>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Returns the active configuration, initializing it on demand.
pub fn get() -> ConfigHandle {
    let slot = slot();
    let mut guard = slot.lock().expect("config slot poisoned");
    if let Some(cfg) = guard.as_ref() {
        return ConfigHandle(Arc::clone(cfg));
    }

    let cfg = Arc::new(ConfigState::new());
    *guard = Some(Arc::clone(&cfg));
    ConfigHandle(cfg)
}

/// Returns the scoring-service configuration, if the credential is present.
pub fn openai_config() -> Option<OpenAiEnv> {
    get().openai().cloned()
}

/// Returns the embedded prompt bundle.
pub fn scoring_prompts() -> ScoringPrompts {
    get().prompts().clone()
}

/// Reads an environment variable, falling back to `default` when it is
/// missing or blank.
fn read_env_or(env: &str, default: &str) -> String {
    std::env::var(env)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
