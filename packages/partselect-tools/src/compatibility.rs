//! Part/model compatibility check.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::client::PartSelect;
use crate::endpoints::{inventory_id, COMPATIBILITY_MARKER};
use crate::error::Result;
use crate::key::IdentifierPair;
use crate::transport::Transport;
use crate::validity::ModelValidity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Compatibility {
    Compatible,
    NotCompatible,
    InvalidPart,
    InvalidModel,
}

impl Compatibility {
    /// Trusts the vendor's marker verbatim; no other inspection.
    pub fn from_response(body: &str) -> Self {
        if body.contains(COMPATIBILITY_MARKER) {
            Self::Compatible
        } else {
            Self::NotCompatible
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Compatible => "The provided part and model are compatible.",
            Self::NotCompatible => "The provided part and model are not compatible.",
            Self::InvalidPart => "The provided part number is invalid.",
            Self::InvalidModel => "The provided model number is invalid.",
        };
        f.write_str(text)
    }
}

impl<T: Transport> PartSelect<T> {
    /// `key` is `<part_id>_+_<model_id>`.
    pub async fn determine_compatibility(&self, key: &str) -> Result<Compatibility> {
        let pair = IdentifierPair::parse(key)?;
        self.check_compatibility(&pair.first, &pair.second).await
    }

    /// Validate the part, then the model, then ask the compatibility endpoint.
    ///
    /// The order is fixed: an invalid part returns before the model is looked up.
    pub async fn check_compatibility(&self, part_id: &str, model_id: &str) -> Result<Compatibility> {
        if !self.confirm_if_valid_part(part_id).await?.is_valid() {
            return Ok(Compatibility::InvalidPart);
        }
        // A model page for an unsupported appliance still goes to the endpoint.
        if let ModelValidity::Invalid = self.confirm_if_valid_model(model_id).await? {
            return Ok(Compatibility::InvalidModel);
        }

        let url = self.endpoints.compatibility(model_id, inventory_id(part_id));
        let body = self.transport.get(&url).await?;
        let result = Compatibility::from_response(&body);

        debug!(part_id, model_id, ?result, "Compatibility checked");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_detection() {
        assert_eq!(
            Compatibility::from_response(r#"{"status":"MODEL_PARTSKU_MATCH"}"#),
            Compatibility::Compatible
        );
        assert_eq!(
            Compatibility::from_response(r#"{"status":"MODEL_PARTSKU_NOMATCH"}"#),
            Compatibility::NotCompatible
        );
        assert_eq!(Compatibility::from_response(""), Compatibility::NotCompatible);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Compatibility::Compatible.to_string(),
            "The provided part and model are compatible."
        );
        assert_eq!(
            Compatibility::InvalidModel.to_string(),
            "The provided model number is invalid."
        );
    }
}
