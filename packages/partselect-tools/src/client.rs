//! Retailer-facing tools.
//!
//! [`PartSelect`] owns the transport and URL builder. Validation lives here;
//! compatibility and related-parts lookups are in their own modules.

use tracing::debug;

use crate::config::Config;
use crate::endpoints::Endpoints;
use crate::error::Result;
use crate::page::SearchPage;
use crate::transport::{HttpTransport, Transport};
use crate::validity::{ModelValidity, PartValidity};

#[derive(Clone)]
pub struct PartSelect<T = HttpTransport> {
    pub(crate) transport: T,
    pub(crate) endpoints: Endpoints,
}

impl PartSelect<HttpTransport> {
    /// Production client for the configured retailer host.
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::new(transport, &config.retailer_base_url))
    }
}

impl<T: Transport> PartSelect<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            endpoints: Endpoints::new(base_url),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Search the retailer for `identifier` and parse the landing page.
    pub async fn search_page(&self, identifier: &str) -> Result<SearchPage> {
        let url = self.endpoints.search(identifier);
        let html = self.transport.get(&url).await?;
        let page = SearchPage::parse(&html);
        debug!(identifier, page_type = ?page.page_type, "Search page classified");
        Ok(page)
    }

    pub async fn confirm_if_valid_part(&self, part_id: &str) -> Result<PartValidity> {
        let page = self.search_page(part_id).await?;
        Ok(PartValidity::classify(&page))
    }

    pub async fn confirm_if_valid_model(&self, model_id: &str) -> Result<ModelValidity> {
        let page = self.search_page(model_id).await?;
        Ok(ModelValidity::classify(&page))
    }
}
