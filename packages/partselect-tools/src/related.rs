//! Related-parts search link for a model.

use serde::Serialize;
use std::fmt;

use crate::client::PartSelect;
use crate::error::Result;
use crate::key::IdentifierPair;
use crate::transport::Transport;
use crate::validity::ModelValidity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RelatedParts {
    /// Search-results page for the model, not fetched
    Url(String),
    InvalidModel,
}

impl RelatedParts {
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::InvalidModel => None,
        }
    }
}

impl fmt::Display for RelatedParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::InvalidModel => f.write_str("Model number is invalid."),
        }
    }
}

impl<T: Transport> PartSelect<T> {
    /// `key` is `<model_id>_+_<search_term>`.
    pub async fn get_related_parts(&self, key: &str) -> Result<RelatedParts> {
        let pair = IdentifierPair::parse(key)?;
        self.related_parts(&pair.first, &pair.second).await
    }

    pub async fn related_parts(&self, model_id: &str, search_term: &str) -> Result<RelatedParts> {
        // Unsupported appliances still get a link; only a missing model stops here.
        if let ModelValidity::Invalid = self.confirm_if_valid_model(model_id).await? {
            return Ok(RelatedParts::InvalidModel);
        }
        Ok(RelatedParts::Url(
            self.endpoints.related_parts(model_id, search_term),
        ))
    }
}
