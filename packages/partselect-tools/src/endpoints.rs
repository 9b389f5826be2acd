//! Retailer URL construction.
//!
//! Every interpolated identifier or search term goes through
//! `urlencoding::encode`. Alphanumeric IDs come out unchanged.

use urlencoding::encode;

/// Marker the compatibility endpoint embeds when the part fits the model.
pub const COMPATIBILITY_MARKER: &str = "MODEL_PARTSKU_MATCH";

/// URL builder for one retailer host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `/api/search/?searchterm=<id>`
    pub fn search(&self, identifier: &str) -> String {
        format!("{}/api/search/?searchterm={}", self.base_url, encode(identifier))
    }

    /// `/api/Part/PartCompatibilityCheck?modelnumber=..&inventoryid=..&partdescription=undefined`
    ///
    /// `inventory_id` must already have its `PS` prefix removed.
    pub fn compatibility(&self, model_id: &str, inventory_id: &str) -> String {
        format!(
            "{}/api/Part/PartCompatibilityCheck?modelnumber={}&inventoryid={}&partdescription=undefined",
            self.base_url,
            encode(model_id),
            encode(inventory_id)
        )
    }

    /// `/Models/<model_id>/Parts/?SearchTerm=<term>`
    pub fn related_parts(&self, model_id: &str, search_term: &str) -> String {
        format!(
            "{}/Models/{}/Parts/?SearchTerm={}",
            self.base_url,
            encode(model_id),
            encode(search_term)
        )
    }
}

/// Vendor inventory IDs omit the `PS` prefix. Only one leading occurrence is removed.
pub fn inventory_id(part_id: &str) -> &str {
    part_id.strip_prefix("PS").unwrap_or(part_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url() {
        let endpoints = Endpoints::new("https://www.partselect.com/");
        assert_eq!(
            endpoints.search("PS11752778"),
            "https://www.partselect.com/api/search/?searchterm=PS11752778"
        );
    }

    #[test]
    fn test_compatibility_url() {
        let endpoints = Endpoints::new("https://www.partselect.com");
        assert_eq!(
            endpoints.compatibility("W987654", "12345"),
            "https://www.partselect.com/api/Part/PartCompatibilityCheck?modelnumber=W987654&inventoryid=12345&partdescription=undefined"
        );
    }

    #[test]
    fn test_related_parts_url_keeps_plain_values() {
        let endpoints = Endpoints::new("https://www.partselect.com");
        assert_eq!(
            endpoints.related_parts("WDT780SAEM1", "Rack"),
            "https://www.partselect.com/Models/WDT780SAEM1/Parts/?SearchTerm=Rack"
        );
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let endpoints = Endpoints::new("https://www.partselect.com");
        assert_eq!(
            endpoints.related_parts("WDT780SAEM1", "door shelf & bin"),
            "https://www.partselect.com/Models/WDT780SAEM1/Parts/?SearchTerm=door%20shelf%20%26%20bin"
        );
        assert_eq!(
            endpoints.search("A/B?C"),
            "https://www.partselect.com/api/search/?searchterm=A%2FB%3FC"
        );
    }

    #[test]
    fn test_inventory_id_strips_single_leading_prefix() {
        assert_eq!(inventory_id("PS12345"), "12345");
        assert_eq!(inventory_id("PSPS1234"), "PS1234");
        assert_eq!(inventory_id("W10PS12"), "W10PS12");
        assert_eq!(inventory_id("ps12345"), "ps12345");
        assert_eq!(inventory_id("PS"), "");
    }
}
