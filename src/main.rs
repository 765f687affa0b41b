use anyhow::Result;
use clap::Parser;
use fable::agent::WriteAndReviewAgent;
use fable::config::{LlmConfig, Properties, StoryGenerationConfig, StoryReviewConfig};
use fable::injected::InjectedDemo;
use fable::llm::LlmClient;
use fable::shell::DemoShell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fable",
    about = "Demo harness for a write-and-review story agent"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Write and review a story via the agent platform
    Demo {
        /// Path to the properties file
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,
    },

    /// Invent an animal via the injected helper
    Animal {
        /// Path to the properties file
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,
    },
}

fn build_shell(
    config_path: &std::path::Path,
) -> Result<DemoShell<WriteAndReviewAgent, InjectedDemo>> {
    let props = Properties::load(config_path)?;
    let generation = StoryGenerationConfig::bind(&props)?;
    let review = StoryReviewConfig::bind(&props)?;
    let llm_config = LlmConfig::bind(&props)?;

    let agent = WriteAndReviewAgent::new(
        LlmClient::from_config(&llm_config)?,
        generation.clone(),
        review,
        &llm_config,
    );
    let injected = InjectedDemo::new(
        LlmClient::from_config(&llm_config)?,
        generation,
        &llm_config,
    );
    Ok(DemoShell::new(agent, injected))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fable=info".parse().unwrap()),
        )
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Demo { config } => {
            let shell = build_shell(&config)?;
            println!("{}", shell.demo().await?);
        }
        Command::Animal { config } => {
            let shell = build_shell(&config)?;
            println!("{}", shell.animal().await?);
        }
    }

    Ok(())
}
