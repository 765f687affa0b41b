//! The injected demo helper: a collaborator handed to the shell by
//! construction, showing the non-agent invocation path.

use crate::config::{LlmConfig, StoryGenerationConfig};
use crate::error::Result;
use crate::llm::{LlmClient, LlmOptions};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An invented animal, rendered for the shell via `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
    pub habitat: String,
    pub description: String,
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.name, self.habitat, self.description
        )
    }
}

/// Collaborator interface: a single no-argument call producing a value
/// the shell converts to text.
pub trait InventAnimal {
    fn invent_animal(&self) -> impl Future<Output = Result<Animal>> + Send;
}

const INVENTOR_SYSTEM: &str =
    "You invent fictional animals. Respond with JSON only: \
     {\"name\": ..., \"habitat\": ..., \"description\": ...}";

/// LLM-backed helper that invents an animal on demand.
pub struct InjectedDemo {
    llm: LlmClient,
    generation: StoryGenerationConfig,
    max_tokens: u32,
}

impl InjectedDemo {
    pub fn new(
        llm: LlmClient,
        generation: StoryGenerationConfig,
        llm_config: &LlmConfig,
    ) -> Self {
        Self {
            llm,
            generation,
            max_tokens: llm_config.max_tokens,
        }
    }
}

impl InventAnimal for InjectedDemo {
    async fn invent_animal(&self) -> Result<Animal> {
        let opts = LlmOptions {
            model: self.generation.model.clone(),
            temperature: self.generation.temperature,
            max_tokens: self.max_tokens,
        };
        self.llm
            .complete_json(
                &opts,
                INVENTOR_SYSTEM,
                "Invent an animal nobody has heard of.",
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animal_display_is_name_habitat_description() {
        let animal = Animal {
            name: "Glimmerfinch".into(),
            habitat: "cloud forests".into(),
            description: "a songbird whose feathers refract moonlight".into(),
        };
        assert_eq!(
            animal.to_string(),
            "Glimmerfinch (cloud forests): a songbird whose feathers refract moonlight"
        );
    }
}
