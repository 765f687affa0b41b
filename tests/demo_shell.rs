use fable::agent::{Agent, ReviewedStory, Story, UserInput};
use fable::config::{Properties, StoryGenerationConfig, StoryReviewConfig};
use fable::error::{Error, Result};
use fable::injected::{Animal, InventAnimal};
use fable::shell::DemoShell;

struct ScriptedPlatform {
    outcome: std::result::Result<ReviewedStory, String>,
}

impl Agent for ScriptedPlatform {
    type Input = UserInput;
    type Output = ReviewedStory;

    async fn run(&self, _input: UserInput) -> Result<ReviewedStory> {
        self.outcome.clone().map_err(Error::agent)
    }
}

struct ScriptedInventor {
    animal: Animal,
}

impl InventAnimal for ScriptedInventor {
    async fn invent_animal(&self) -> Result<Animal> {
        Ok(self.animal.clone())
    }
}

fn reviewed(text: &str, review: &str) -> ReviewedStory {
    ReviewedStory {
        story: Story { text: text.into() },
        review: review.into(),
    }
}

fn shell_with(
    outcome: std::result::Result<ReviewedStory, String>,
) -> DemoShell<ScriptedPlatform, ScriptedInventor> {
    DemoShell::new(
        ScriptedPlatform { outcome },
        ScriptedInventor {
            animal: Animal {
                name: "Thistlewing".into(),
                habitat: "alpine meadows".into(),
                description: "a moth that nests in thistle crowns".into(),
            },
        },
    )
}

#[tokio::test]
async fn demo_passes_through_the_platform_result() {
    let result = reviewed("The caterpillar crossed the garden.", "Sparse but warm.");
    let shell = shell_with(Ok(result.clone()));
    assert_eq!(shell.demo().await.unwrap(), result.content());
}

#[tokio::test]
async fn demo_surfaces_platform_failures() {
    let shell = shell_with(Err("execution failed after 2 actions".into()));
    let err = shell.demo().await.unwrap_err();
    assert!(err.to_string().contains("execution failed"));
}

#[tokio::test]
async fn animal_returns_the_helper_value_as_text() {
    let shell = shell_with(Err("unused".into()));
    assert_eq!(
        shell.animal().await.unwrap(),
        "Thistlewing (alpine meadows): a moth that nests in thistle crowns"
    );
}

#[test]
fn bundles_bound_from_one_source_stay_independent() {
    let props = Properties::from_toml_str(
        r#"
[story.generation]
model = "gpt-4o"
temperature = 1.1

[story.review]
word-count = 60
"#,
    )
    .unwrap();

    let generation = StoryGenerationConfig::bind(&props).unwrap();
    let review = StoryReviewConfig::bind(&props).unwrap();

    assert_eq!(generation.model, "gpt-4o");
    assert_eq!(generation.word_count, 100);
    assert_eq!(review.model, "gpt-4o-mini");
    assert_eq!(review.word_count, 60);
    assert!((review.temperature - 0.2).abs() < f64::EPSILON);
}
