//! Extraction prompts as versioned configuration.
//!
//! The three extraction tasks (part ID, model ID, title category) each carry an
//! instruction and a list of worked examples. The built-in set can be replaced
//! by a JSON file so prompt changes are reviewable apart from code changes.
//!
//! ```json
//! {
//!   "version": "2",
//!   "part_id": { "instruction": "...", "examples": [{ "input": "...", "output": "..." }] },
//!   "model_id": { ... },
//!   "title_category": {
//!     "instruction": "...",
//!     "example_format": { "first": "...\"{input}\"...\"{output}\"", "next": "...", "closing": "." },
//!     "examples": [...]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Version tag of the built-in prompt set.
pub const BUILTIN_VERSION: &str = "1";

/// One worked example embedded in an instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptExample {
    pub input: String,
    pub output: String,
}

impl PromptExample {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// How worked examples are phrased after the instruction.
///
/// `{input}` and `{output}` are replaced per example. `first` is used for the
/// first example, `next` for each later one, and `closing` ends the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleFormat {
    pub first: String,
    pub next: String,
    #[serde(default)]
    pub closing: String,
}

impl Default for ExampleFormat {
    fn default() -> Self {
        Self::query()
    }
}

impl ExampleFormat {
    /// "For example, for the query ..., respond with just ...", one sentence each.
    pub fn query() -> Self {
        Self {
            first: r#"For example, for the query "{input}", respond with just "{output}"."#.to_string(),
            next: r#" As another example, if a query is "{input}", only respond with "{output}"."#
                .to_string(),
            closing: String::new(),
        }
    }

    /// "For example, for the title ..., you should respond ..., or given ...", one sentence.
    pub fn title() -> Self {
        Self {
            first: r#"For example, for the title "{input}", you should respond "{output}""#.to_string(),
            next: r#", or given "{input}", you should respond "{output}""#.to_string(),
            closing: ".".to_string(),
        }
    }

    fn fill(template: &str, example: &PromptExample) -> String {
        template
            .replace("{input}", &example.input)
            .replace("{output}", &example.output)
    }
}

/// A single extraction instruction with few-shot examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionPrompt {
    pub instruction: String,

    #[serde(default)]
    pub example_format: ExampleFormat,

    #[serde(default)]
    pub examples: Vec<PromptExample>,
}

impl ExtractionPrompt {
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            example_format: ExampleFormat::default(),
            examples: Vec::new(),
        }
    }

    pub fn with_example_format(mut self, format: ExampleFormat) -> Self {
        self.example_format = format;
        self
    }

    pub fn with_example(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.examples.push(PromptExample::new(input, output));
        self
    }

    /// Render the system instruction sent with every request.
    pub fn render(&self) -> String {
        let mut rendered = self.instruction.trim().to_string();
        let Some((head, rest)) = self.examples.split_first() else {
            return rendered;
        };

        let format = &self.example_format;
        rendered.push(' ');
        rendered.push_str(&ExampleFormat::fill(&format.first, head));
        for example in rest {
            rendered.push_str(&ExampleFormat::fill(&format.next, example));
        }
        rendered.push_str(&format.closing);
        rendered
    }
}

/// The full set of extraction prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSet {
    pub version: String,
    pub part_id: ExtractionPrompt,
    pub model_id: ExtractionPrompt,
    pub title_category: ExtractionPrompt,
}

impl Default for PromptSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PromptSet {
    /// The built-in prompts.
    pub fn builtin() -> Self {
        Self {
            version: BUILTIN_VERSION.to_string(),
            part_id: ExtractionPrompt::new(
                "Your job is to identify and extract a part ID and part numbers from a given query. \
                 You work for a home appliance website. Sometimes, a query will contain multiple part \
                 IDs. Only extract and respond with the first ID provided. Sometimes, a query will \
                 contain a part ID AND a model ID. Only extract and return the part ID.",
            )
            .with_example("How much is part W11384469?", "W11384469")
            .with_example("Does part 8194001 fit with model 2213222N414?", "8194001"),
            model_id: ExtractionPrompt::new(
                "Your job is to identify and extract a model ID and model numbers from a given query. \
                 You work for a home appliance website. Sometimes, a query will contain multiple model \
                 IDs. Only extract and respond with the first ID provided. Sometimes, a query will \
                 contain a model ID AND a part ID. Only extract and return the model ID.",
            )
            .with_example("How do I fix my dishwasher model 2213222N414", "2213222N414")
            .with_example("Does part 8194001 fit with model 106106813067?", "106106813067"),
            title_category: ExtractionPrompt::new(
                "You are a title synthesizer for a home appliance website. You can identify the \
                 keyword and product category from a given title. Given a product title, respond \
                 only with the main category in one word.",
            )
            .with_example_format(ExampleFormat::title())
            .with_example("LOWER RACK ROLLER WD12X26146", "Roller")
            .with_example("Utility Drawer Gasket - White WP2183037", "Gasket"),
        }
    }

    /// Parse a prompt set from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a prompt set from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}
