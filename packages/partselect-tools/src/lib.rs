//! PartSelect assistant tools
//!
//! The helper layer behind a home-appliance parts assistant: pull part and
//! model numbers out of customer messages, check them against PartSelect,
//! check whether a part fits a model, and link to a model's parts search.
//!
//! Every operation is a short sequence of awaited requests. There is no
//! caching and no retry; errors surface to the caller unchanged.
//!
//! # Usage
//!
//! ```rust,ignore
//! use partselect_tools::{Config, PartSelect, IdentifierExtractor, OpenAIChat};
//!
//! let config = Config::from_env()?;
//! let partselect = PartSelect::from_config(&config)?;
//!
//! let answer = partselect
//!     .determine_compatibility("PS11752778_+_WDT780SAEM1")
//!     .await?;
//! println!("{answer}");
//!
//! let extractor = IdentifierExtractor::new(OpenAIChat::from_config(&config)?);
//! let part_id = extractor.extract_part_id("Is PS11752778 in stock?").await?;
//! ```
//!
//! # Modules
//!
//! - [`client`] - `PartSelect` facade and validation
//! - [`compatibility`] / [`related`] - the two composed operations
//! - [`extract`] / [`llm`] / [`prompts`] - identifier extraction with a hosted model
//! - [`tools`] - function-calling surface for an agent
//! - [`testing`] - mock transport and completion model

pub mod client;
pub mod compatibility;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod extract;
pub mod key;
pub mod llm;
pub mod page;
pub mod prompts;
pub mod related;
pub mod testing;
pub mod tools;
pub mod transport;
pub mod validity;

pub use client::PartSelect;
pub use compatibility::Compatibility;
pub use config::Config;
pub use endpoints::Endpoints;
pub use error::{Error, Result};
pub use extract::IdentifierExtractor;
pub use key::IdentifierPair;
pub use llm::{CompletionModel, OpenAIChat};
pub use page::SearchPage;
pub use prompts::{ExampleFormat, ExtractionPrompt, PromptExample, PromptSet};
pub use related::RelatedParts;
pub use tools::{ErasedTool, Tool, ToolDefinition, ToolError, Toolbox};
pub use transport::{HttpTransport, Transport};
pub use validity::{ApplianceType, ModelValidity, PartValidity};
