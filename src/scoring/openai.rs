use anyhow::{Context, Result, anyhow};
use async_openai::{
    Client as OpenAIClient,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequest,
    },
};
use futures::future::BoxFuture;
use tracing::debug;

use super::{EssayScorer, ScoringPrompts, schema};
use crate::{
    config::{self, OpenAiEnv},
    essay::{EducationLevel, EssayResult},
};

/// Scoring client backed by an OpenAI-compatible chat-completions endpoint.
///
/// One call to [`EssayScorer::score`] makes exactly one request. The response
/// is schema-constrained, so the returned JSON deserializes directly into an
/// [`EssayResult`]; anything else surfaces as an error.
pub struct OpenAiScorer {
    /// Endpoint, credential, and sampling configuration.
    env:     OpenAiEnv,
    /// Prompt templates sent with every request.
    prompts: ScoringPrompts,
}

impl OpenAiScorer {
    /// Builds a scorer from explicit configuration, for embedders that manage
    /// their own environment.
    pub fn new(env: OpenAiEnv, prompts: ScoringPrompts) -> Self {
        Self { env, prompts }
    }

    /// Builds a scorer from the global configuration. Fails when the scoring
    /// credential is absent from the environment.
    pub fn from_config() -> Result<Self> {
        let env = config::openai_config()
            .ok_or_else(|| anyhow!("LUMINA_API_KEY must be set to score essays"))?;

        Ok(Self {
            env,
            prompts: config::scoring_prompts(),
        })
    }

    /// Performs the single chat-completion call and parses the graded result.
    async fn request(&self, essay: &str, level: EducationLevel) -> Result<EssayResult> {
        let openai_client = OpenAIClient::with_config(
            OpenAIConfig::new()
                .with_api_base(self.env.api_base().to_string())
                .with_api_key(self.env.api_key().to_string()),
        );

        let messages = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.prompts.assessor_system().to_string())
                .name("Assessor".to_string())
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(self.prompts.grading_request(essay, level))
                .name("Student".to_string())
                .build()?
                .into(),
        ];

        debug!(model = self.env.model(), %level, "Requesting essay score");

        let response = openai_client
            .chat()
            .create(CreateChatCompletionRequest {
                model: self.env.model().to_string(),
                messages,
                temperature: self.env.temperature(),
                top_p: self.env.top_p(),
                n: Some(1),
                stream: Some(false),
                response_format: Some(schema::essay_result_response_format()),
                ..Default::default()
            })
            .await
            .context("Essay scoring request failed")?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| anyhow!("Scoring service returned no content"))?;

        serde_json::from_str(content.trim())
            .context("Scoring response did not match the graded-result contract")
    }
}

impl EssayScorer for OpenAiScorer {
    fn score<'a>(
        &'a self,
        essay: &'a str,
        level: EducationLevel,
    ) -> BoxFuture<'a, Result<EssayResult>> {
        Box::pin(self.request(essay, level))
    }
}
