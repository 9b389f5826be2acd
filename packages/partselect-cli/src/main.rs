//! CLI for running the PartSelect assistant tools by hand
//!
//! Each subcommand runs one operation and prints the text the agent would see.
//! Configuration comes from the environment (and `.env`).

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use partselect_tools::{
    Config, IdentifierExtractor, IdentifierPair, OpenAIChat, PartSelect, PromptSet, Toolbox,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "partselect")]
#[command(about = "Look up, validate and match PartSelect parts and models")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the first part number from a message
    ExtractPart { query: String },

    /// Extract the first model number from a message
    ExtractModel { query: String },

    /// One-word category for a product title
    Category { title: String },

    /// Check that a part number exists
    Part { part_id: String },

    /// Check that a model number exists and is a refrigerator or dishwasher
    Model { model_id: String },

    /// Check whether a part fits a model
    Compat {
        part_id: Option<String>,
        model_id: Option<String>,
        /// Combined "<part>_+_<model>" key instead of two arguments
        #[arg(long, conflicts_with_all = ["part_id", "model_id"])]
        key: Option<String>,
    },

    /// Link to a model's parts matching a search term
    Related { model_id: String, search_term: String },

    /// Print tool definitions in OpenAI function-calling format
    Tools,

    /// Call a tool by name with JSON arguments
    Call { name: String, arguments: String },
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,partselect_tools=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::ExtractPart { query } => {
            let extractor = extractor(&config)?;
            output(extractor.extract_part_id(&query).await?);
        }
        Commands::ExtractModel { query } => {
            let extractor = extractor(&config)?;
            output(extractor.extract_model_id(&query).await?);
        }
        Commands::Category { title } => {
            let extractor = extractor(&config)?;
            output(extractor.classify_title_category(&title).await?);
        }
        Commands::Part { part_id } => {
            let result = partselect(&config)?.confirm_if_valid_part(&part_id).await?;
            output(result);
        }
        Commands::Model { model_id } => {
            let result = partselect(&config)?.confirm_if_valid_model(&model_id).await?;
            output(result);
        }
        Commands::Compat {
            part_id,
            model_id,
            key,
        } => {
            let key = match (key, part_id, model_id) {
                (Some(key), _, _) => key,
                (None, Some(part), Some(model)) => IdentifierPair::join(&part, &model),
                _ => anyhow::bail!("compat needs <PART_ID> <MODEL_ID> or --key"),
            };
            let result = partselect(&config)?.determine_compatibility(&key).await?;
            output(result);
        }
        Commands::Related {
            model_id,
            search_term,
        } => {
            let result = partselect(&config)?
                .related_parts(&model_id, &search_term)
                .await?;
            output(result);
        }
        Commands::Tools => {
            let definitions = toolbox(&config)?.openai_definitions();
            output(serde_json::to_string_pretty(&definitions)?);
        }
        Commands::Call { name, arguments } => {
            let result = toolbox(&config)?.call(&name, &arguments).await?;
            output(result);
        }
    }

    Ok(())
}

fn output(text: impl std::fmt::Display) {
    println!("{}", text);
}

// ============================================================================
// Wiring
// ============================================================================

fn partselect(config: &Config) -> Result<PartSelect> {
    PartSelect::from_config(config).context("Failed to create retailer client")
}

fn extractor(config: &Config) -> Result<IdentifierExtractor<OpenAIChat>> {
    let model = OpenAIChat::from_config(config).context("Failed to create completion client")?;
    let prompts = match &config.prompts_path {
        Some(path) => PromptSet::from_file(path)
            .with_context(|| format!("Failed to load prompts from {}", path.display()))?,
        None => PromptSet::builtin(),
    };
    tracing::debug!(version = %prompts.version, "Prompt set loaded");
    Ok(IdentifierExtractor::with_prompts(model, prompts))
}

/// Extraction tools are only registered when an API key is configured.
fn toolbox(config: &Config) -> Result<Toolbox> {
    let partselect = Arc::new(partselect(config)?);
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set, extraction tools unavailable");
        return Ok(Toolbox::retailer_only(partselect));
    }
    Ok(Toolbox::new(partselect, Arc::new(extractor(config)?)))
}
