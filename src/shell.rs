//! Command shell: the two demo entry points. Collaborators arrive by
//! constructor, errors leave untranslated.

use crate::agent::{Agent, ReviewedStory, UserInput};
use crate::error::Result;
use crate::injected::InventAnimal;

const DEMO_PROMPT: &str = "Tell me a story about caterpillars";

pub struct DemoShell<P, D> {
    platform: P,
    injected: D,
}

impl<P, D> DemoShell<P, D>
where
    P: Agent<Input = UserInput, Output = ReviewedStory>,
    D: InventAnimal,
{
    pub fn new(platform: P, injected: D) -> Self {
        Self { platform, injected }
    }

    /// Invoke the story agent programmatically, as most often occurs in
    /// real applications, and return the reviewed story's text.
    pub async fn demo(&self) -> Result<String> {
        let reviewed = self.platform.run(UserInput::new(DEMO_PROMPT)).await?;
        Ok(reviewed.content())
    }

    /// Ask the injected helper to invent an animal.
    pub async fn animal(&self) -> Result<String> {
        let animal = self.injected.invent_animal().await?;
        Ok(animal.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Story;
    use crate::error::Error;
    use crate::injected::Animal;

    struct FixedAgent {
        result: ReviewedStory,
    }

    impl Agent for FixedAgent {
        type Input = UserInput;
        type Output = ReviewedStory;

        async fn run(&self, input: UserInput) -> Result<ReviewedStory> {
            assert_eq!(input.to_string(), DEMO_PROMPT);
            Ok(self.result.clone())
        }
    }

    struct FailingAgent;

    impl Agent for FailingAgent {
        type Input = UserInput;
        type Output = ReviewedStory;

        async fn run(&self, _input: UserInput) -> Result<ReviewedStory> {
            Err(Error::agent("no agent found for ReviewedStory"))
        }
    }

    struct FixedInventor {
        animal: Animal,
    }

    impl InventAnimal for FixedInventor {
        async fn invent_animal(&self) -> Result<Animal> {
            Ok(self.animal.clone())
        }
    }

    fn inventor() -> FixedInventor {
        FixedInventor {
            animal: Animal {
                name: "Mossback".into(),
                habitat: "peat bogs".into(),
                description: "a turtle that grows its own garden".into(),
            },
        }
    }

    #[tokio::test]
    async fn demo_returns_reviewed_story_content_unmodified() {
        let reviewed = ReviewedStory {
            story: Story {
                text: "A caterpillar dreamed of wings.".into(),
            },
            review: "Tender and concise.".into(),
        };
        let shell = DemoShell::new(
            FixedAgent {
                result: reviewed.clone(),
            },
            inventor(),
        );
        assert_eq!(shell.demo().await.unwrap(), reviewed.content());
    }

    #[tokio::test]
    async fn demo_propagates_agent_errors() {
        let shell = DemoShell::new(FailingAgent, inventor());
        let err = shell.demo().await.unwrap_err();
        assert!(matches!(err, Error::Agent(_)));
    }

    #[tokio::test]
    async fn animal_returns_display_of_invented_animal() {
        let fixed = inventor();
        let expected = fixed.animal.to_string();
        let shell = DemoShell::new(FailingAgent, fixed);
        assert_eq!(shell.animal().await.unwrap(), expected);
    }
}
