//! The write-and-review story agent and the invocation seam it sits behind.
//!
//! Callers never depend on the concrete agent: they ask for a result type
//! through the [`Agent`] trait and get back either that value or the error
//! the agent raised, untranslated. The demo's concrete implementation runs
//! two sequential LLM steps — write with the generation bundle, review with
//! the review bundle.

use crate::config::{LlmConfig, StoryGenerationConfig, StoryReviewConfig};
use crate::error::Result;
use crate::llm::{LlmClient, LlmOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Opaque request value handed to an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput(pub String);

impl UserInput {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }
}

impl fmt::Display for UserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub text: String,
}

/// A story together with its review — the demo's final result type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewedStory {
    pub story: Story,
    pub review: String,
}

impl ReviewedStory {
    pub fn content(&self) -> String {
        format!("{}\n\n{}", self.story.text, self.review)
    }
}

impl fmt::Display for ReviewedStory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content())
    }
}

/// Invocation seam: one call, typed by the result the caller wants.
///
/// The call blocks the caller until the agent produces its output or
/// fails; there is no retry and no cancellation surface here.
pub trait Agent {
    type Input;
    type Output;

    fn run(&self, input: Self::Input) -> impl Future<Output = Result<Self::Output>> + Send;
}

const WRITER_SYSTEM: &str =
    "You are a skilled short-story writer. Write vivid, self-contained stories. \
     Respond with the story text only, no preamble.";

const REVIEWER_SYSTEM: &str =
    "You are a thoughtful literary reviewer. Give an honest, constructive review \
     of the story you are shown. Respond with the review text only.";

/// Writes a story for the given input, then reviews it. Each step carries
/// its own model, temperature, and word-count target from configuration.
pub struct WriteAndReviewAgent {
    llm: LlmClient,
    generation: StoryGenerationConfig,
    review: StoryReviewConfig,
    max_tokens: u32,
}

impl WriteAndReviewAgent {
    pub fn new(
        llm: LlmClient,
        generation: StoryGenerationConfig,
        review: StoryReviewConfig,
        llm_config: &LlmConfig,
    ) -> Self {
        Self {
            llm,
            generation,
            review,
            max_tokens: llm_config.max_tokens,
        }
    }

    async fn write_story(&self, input: &UserInput) -> Result<Story> {
        let opts = LlmOptions {
            model: self.generation.model.clone(),
            temperature: self.generation.temperature,
            max_tokens: self.max_tokens,
        };
        let prompt = format!(
            "{input}\n\nWrite the story in about {} words.",
            self.generation.word_count
        );
        let text = self.llm.complete(&opts, WRITER_SYSTEM, &prompt).await?;
        Ok(Story { text })
    }

    async fn review_story(&self, story: &Story) -> Result<String> {
        let opts = LlmOptions {
            model: self.review.model.clone(),
            temperature: self.review.temperature,
            max_tokens: self.max_tokens,
        };
        let prompt = format!(
            "Review the following story in about {} words:\n\n{}",
            self.review.word_count, story.text
        );
        self.llm.complete(&opts, REVIEWER_SYSTEM, &prompt).await
    }
}

impl Agent for WriteAndReviewAgent {
    type Input = UserInput;
    type Output = ReviewedStory;

    async fn run(&self, input: UserInput) -> Result<ReviewedStory> {
        info!(model = %self.generation.model, "writing story");
        let story = self.write_story(&input).await?;

        info!(model = %self.review.model, "reviewing story");
        let review = self.review_story(&story).await?;

        Ok(ReviewedStory { story, review })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reviewed_story_content_joins_story_and_review() {
        let reviewed = ReviewedStory {
            story: Story {
                text: "Once upon a time.".into(),
            },
            review: "Charming but brief.".into(),
        };
        assert_eq!(reviewed.content(), "Once upon a time.\n\nCharming but brief.");
        assert_eq!(reviewed.to_string(), reviewed.content());
    }

    #[test]
    fn user_input_displays_its_content() {
        let input = UserInput::new("Tell me a story");
        assert_eq!(input.to_string(), "Tell me a story");
    }
}
