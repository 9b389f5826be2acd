//! Function-calling surface for the conversational agent.
//!
//! Each operation is a [`Tool`] with typed arguments and a JSON schema. The
//! agent addresses them by name through a [`Toolbox`], passing arguments as a
//! JSON string and getting back the presentation text (as a JSON string).
//!
//! # Example
//!
//! ```rust,ignore
//! let toolbox = Toolbox::new(Arc::new(partselect), Arc::new(extractor));
//! let tools = toolbox.openai_definitions();
//! let answer = toolbox
//!     .call("determine_compatibility", r#"{"combined": "PS11752778_+_WDT780SAEM1"}"#)
//!     .await?;
//! ```

use async_trait::async_trait;
use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::client::PartSelect;
use crate::extract::IdentifierExtractor;
use crate::llm::CompletionModel;
use crate::transport::Transport;

/// A tool the model can call.
#[async_trait]
pub trait Tool: Send + Sync {
    const NAME: &'static str;

    type Args: DeserializeOwned + JsonSchema + Send;

    fn description(&self) -> &str;

    /// Run the tool and return the text shown to the agent.
    async fn call(&self, args: Self::Args) -> crate::Result<String>;

    fn definition(&self) -> ToolDefinition {
        let mut parameters = serde_json::to_value(schema_for!(Self::Args)).unwrap_or_default();
        if let serde_json::Value::Object(map) = &mut parameters {
            map.remove("$schema");
            map.remove("title");
        }
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: self.description().to_string(),
            parameters,
        }
    }
}

/// Tool definition (name, description, JSON schema of arguments).
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    /// OpenAI function-calling format.
    pub fn to_openai_format(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters
            }
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Failed to parse arguments: {0}")]
    ArgumentParse(String),

    #[error("Tool execution failed: {0}")]
    Execution(#[from] crate::Error),

    #[error("Failed to serialize output: {0}")]
    OutputSerialize(String),
}

/// Type-erased tool for storing heterogeneous tools together.
#[async_trait]
pub trait ErasedTool: Send + Sync {
    fn name(&self) -> &str;

    fn definition(&self) -> ToolDefinition;

    /// Execute with JSON arguments, returning JSON output.
    async fn call_erased(&self, arguments: &str) -> Result<String, ToolError>;
}

#[async_trait]
impl<T: Tool> ErasedTool for T {
    fn name(&self) -> &str {
        T::NAME
    }

    fn definition(&self) -> ToolDefinition {
        Tool::definition(self)
    }

    async fn call_erased(&self, arguments: &str) -> Result<String, ToolError> {
        let args: T::Args = serde_json::from_str(arguments)
            .map_err(|e| ToolError::ArgumentParse(e.to_string()))?;

        let output = self.call(args).await?;

        serde_json::to_string(&output).map_err(|e| ToolError::OutputSerialize(e.to_string()))
    }
}

// =============================================================================
// Argument types
// =============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CombinedArgs {
    /// Two identifiers joined by "_+_"
    pub combined: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct QueryArgs {
    /// The customer's message, verbatim
    pub query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TitleArgs {
    /// Product title, e.g. "LOWER RACK ROLLER WD12X26146"
    pub title: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PartArgs {
    pub part_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ModelArgs {
    pub model_id: String,
}

// =============================================================================
// Retailer tools
// =============================================================================

pub struct DetermineCompatibility<T>(pub Arc<PartSelect<T>>);

#[async_trait]
impl<T: Transport + 'static> Tool for DetermineCompatibility<T> {
    const NAME: &'static str = "determine_compatibility";
    type Args = CombinedArgs;

    fn description(&self) -> &str {
        "Check whether a part fits a model. Pass the part number and the model number \
         joined by \"_+_\", part first, e.g. \"PS11752778_+_WDT780SAEM1\"."
    }

    async fn call(&self, args: Self::Args) -> crate::Result<String> {
        Ok(self.0.determine_compatibility(&args.combined).await?.to_string())
    }
}

pub struct GetRelatedParts<T>(pub Arc<PartSelect<T>>);

#[async_trait]
impl<T: Transport + 'static> Tool for GetRelatedParts<T> {
    const NAME: &'static str = "get_related_parts";
    type Args = CombinedArgs;

    fn description(&self) -> &str {
        "Get a link to parts for a model matching a search term. Pass the model number and \
         the term joined by \"_+_\", model first, e.g. \"WDT780SAEM1_+_rack\"."
    }

    async fn call(&self, args: Self::Args) -> crate::Result<String> {
        Ok(self.0.get_related_parts(&args.combined).await?.to_string())
    }
}

pub struct ConfirmPart<T>(pub Arc<PartSelect<T>>);

#[async_trait]
impl<T: Transport + 'static> Tool for ConfirmPart<T> {
    const NAME: &'static str = "confirm_if_valid_part";
    type Args = PartArgs;

    fn description(&self) -> &str {
        "Check that a part number exists on PartSelect."
    }

    async fn call(&self, args: Self::Args) -> crate::Result<String> {
        Ok(self.0.confirm_if_valid_part(&args.part_id).await?.to_string())
    }
}

pub struct ConfirmModel<T>(pub Arc<PartSelect<T>>);

#[async_trait]
impl<T: Transport + 'static> Tool for ConfirmModel<T> {
    const NAME: &'static str = "confirm_if_valid_model";
    type Args = ModelArgs;

    fn description(&self) -> &str {
        "Check that a model number exists on PartSelect and is a refrigerator or dishwasher."
    }

    async fn call(&self, args: Self::Args) -> crate::Result<String> {
        Ok(self.0.confirm_if_valid_model(&args.model_id).await?.to_string())
    }
}

// =============================================================================
// Extraction tools
// =============================================================================

pub struct ExtractPartId<M>(pub Arc<IdentifierExtractor<M>>);

#[async_trait]
impl<M: CompletionModel + 'static> Tool for ExtractPartId<M> {
    const NAME: &'static str = "extract_part_id";
    type Args = QueryArgs;

    fn description(&self) -> &str {
        "Pull the first part number out of a customer message."
    }

    async fn call(&self, args: Self::Args) -> crate::Result<String> {
        self.0.extract_part_id(&args.query).await
    }
}

pub struct ExtractModelId<M>(pub Arc<IdentifierExtractor<M>>);

#[async_trait]
impl<M: CompletionModel + 'static> Tool for ExtractModelId<M> {
    const NAME: &'static str = "extract_model_id";
    type Args = QueryArgs;

    fn description(&self) -> &str {
        "Pull the first model number out of a customer message."
    }

    async fn call(&self, args: Self::Args) -> crate::Result<String> {
        self.0.extract_model_id(&args.query).await
    }
}

pub struct ClassifyTitleCategory<M>(pub Arc<IdentifierExtractor<M>>);

#[async_trait]
impl<M: CompletionModel + 'static> Tool for ClassifyTitleCategory<M> {
    const NAME: &'static str = "classify_title_category";
    type Args = TitleArgs;

    fn description(&self) -> &str {
        "Reduce a product title to its one-word category, e.g. \"Gasket\"."
    }

    async fn call(&self, args: Self::Args) -> crate::Result<String> {
        self.0.classify_title_category(&args.title).await
    }
}

// =============================================================================
// Toolbox
// =============================================================================

/// The registered tools, addressed by name.
#[derive(Default)]
pub struct Toolbox {
    tools: Vec<Box<dyn ErasedTool>>,
}

impl Toolbox {
    /// All seven tools.
    pub fn new<T, M>(partselect: Arc<PartSelect<T>>, extractor: Arc<IdentifierExtractor<M>>) -> Self
    where
        T: Transport + 'static,
        M: CompletionModel + 'static,
    {
        Self::retailer_only(partselect)
            .with_tool(ExtractPartId(extractor.clone()))
            .with_tool(ExtractModelId(extractor.clone()))
            .with_tool(ClassifyTitleCategory(extractor))
    }

    /// Only the tools that talk to the retailer (no completion model needed).
    pub fn retailer_only<T: Transport + 'static>(partselect: Arc<PartSelect<T>>) -> Self {
        Self::default()
            .with_tool(DetermineCompatibility(partselect.clone()))
            .with_tool(GetRelatedParts(partselect.clone()))
            .with_tool(ConfirmPart(partselect.clone()))
            .with_tool(ConfirmModel(partselect))
    }

    pub fn with_tool(mut self, tool: impl ErasedTool + 'static) -> Self {
        self.tools.push(Box::new(tool));
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    pub fn openai_definitions(&self) -> Vec<serde_json::Value> {
        self.definitions()
            .iter()
            .map(ToolDefinition::to_openai_format)
            .collect()
    }

    /// Dispatch a call by tool name.
    pub async fn call(&self, name: &str, arguments: &str) -> Result<String, ToolError> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tool.call_erased(arguments).await
    }
}
