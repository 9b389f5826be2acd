//! Identifier extraction through the completion model.
//!
//! The answer comes back verbatim. Callers assume it is exactly the
//! identifier; nothing checks that the model did not add commentary.

use std::time::Instant;
use tracing::debug;

use crate::error::Result;
use crate::llm::CompletionModel;
use crate::prompts::{ExtractionPrompt, PromptSet};

pub struct IdentifierExtractor<M> {
    model: M,
    prompts: PromptSet,
}

impl<M: CompletionModel> IdentifierExtractor<M> {
    /// Extractor using the built-in prompt set.
    pub fn new(model: M) -> Self {
        Self::with_prompts(model, PromptSet::builtin())
    }

    pub fn with_prompts(model: M, prompts: PromptSet) -> Self {
        Self { model, prompts }
    }

    pub fn prompts(&self) -> &PromptSet {
        &self.prompts
    }

    /// First part ID mentioned in `query`.
    pub async fn extract_part_id(&self, query: &str) -> Result<String> {
        self.run("part_id", &self.prompts.part_id, query).await
    }

    /// First model ID mentioned in `query`.
    pub async fn extract_model_id(&self, query: &str) -> Result<String> {
        self.run("model_id", &self.prompts.model_id, query).await
    }

    /// One-word product category for a part title.
    pub async fn classify_title_category(&self, title: &str) -> Result<String> {
        self.run("title_category", &self.prompts.title_category, title)
            .await
    }

    async fn run(&self, task: &str, prompt: &ExtractionPrompt, input: &str) -> Result<String> {
        let start = Instant::now();
        let answer = self.model.complete(&prompt.render(), input).await?;

        debug!(
            task,
            prompt_version = %self.prompts.version,
            duration_ms = start.elapsed().as_millis(),
            "Extraction completed"
        );

        Ok(answer)
    }
}
