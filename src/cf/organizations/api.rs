//! Organization API operations

use log::debug;

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::OrgResource;

impl CfClient {
    /// Fetch an organization by guid
    pub async fn get_organization(&self, guid: &str) -> Result<OrgResource> {
        let url = format!("{}/{}", self.url(api::ORGANIZATIONS), guid);
        debug!("Fetching organization from: {}", url);

        let response = self.get(&url).send().await?;
        self.parse_api_response(response, &format!("organization '{}'", guid))
            .await
    }
}
