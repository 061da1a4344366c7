/*!
 * Two-stage scene generation pipeline.
 *
 * Stage 1 turns the learner's concept into a plain-language explanation;
 * stage 2 embeds that explanation in a second prompt and decodes the
 * generated scene graph. Each stage's backend call runs under the retry
 * controller independently; extraction failures are fatal and there is no
 * fallback scene.
 */

use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;

use crate::errors::{PipelineError, ProviderError};
use crate::prompts;
use crate::providers::TextGenerator;
use crate::retry::{RetryPolicy, is_transient, run_with_retry};
use crate::scene::extractor;
use crate::scene::graph::SceneGraph;

/// Successful output of a pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct SceneResult {
    /// The stage-1 plain-language explanation
    pub explanation: String,

    /// The stage-2 structured scene description
    #[serde(rename = "sceneGraph")]
    pub scene_graph: SceneGraph,
}

/// Orchestrates explanation and scene-graph generation over an injected
/// backend.
pub struct ScenePipeline {
    /// Generation backend; injected so tests can substitute a deterministic stub
    generator: Arc<dyn TextGenerator>,

    /// Retry policy applied to each stage's backend call
    retry: RetryPolicy,
}

impl ScenePipeline {
    /// Create a pipeline with the default retry policy.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            retry: RetryPolicy::default(),
        }
    }

    /// Override the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Run the full two-stage pipeline for a learner concept.
    ///
    /// Returns the explanation together with the decoded scene graph, or the
    /// first fatal error. A blank concept is rejected before any backend
    /// call.
    pub async fn generate(&self, concept: &str) -> Result<SceneResult, PipelineError> {
        if concept.trim().is_empty() {
            return Err(PipelineError::MissingInput("concept"));
        }

        info!("Stage 1: generating explanation");
        let prompt = prompts::explanation_prompt(concept);
        let explanation = self.generate_with_retry(&prompt).await?;
        info!("Stage 1 complete ({} chars)", explanation.len());

        info!("Stage 2: generating scene graph");
        let prompt = prompts::scene_graph_prompt(&explanation, concept);
        let raw = self.generate_with_retry(&prompt).await?;
        debug!("Stage 2 raw output: {} chars", raw.len());

        let scene_graph = extractor::extract_scene_graph(&raw)?;
        info!(
            "Stage 2 complete: {} objects, {} relationships, {} sequence steps",
            scene_graph.objects.len(),
            scene_graph.relationships.len(),
            scene_graph.sequence.len()
        );

        Ok(SceneResult {
            explanation,
            scene_graph,
        })
    }

    /// One backend call under the retry controller.
    async fn generate_with_retry(&self, prompt: &str) -> Result<String, ProviderError> {
        run_with_retry(
            self.retry,
            || {
                let generator = Arc::clone(&self.generator);
                let prompt = prompt.to_string();
                async move { generator.generate(&prompt).await }
            },
            |error: &ProviderError| is_transient(&error.to_string()),
        )
        .await
    }
}
