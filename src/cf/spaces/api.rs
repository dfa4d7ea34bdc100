//! Space API operations

use log::debug;

use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

use super::models::SpaceResource;

impl CfClient {
    /// Fetch a space by guid
    pub async fn get_space(&self, guid: &str) -> Result<SpaceResource> {
        let url = format!("{}/{}", self.url(api::SPACES), guid);
        debug!("Fetching space from: {}", url);

        let response = self.get(&url).send().await?;
        self.parse_api_response(response, &format!("space '{}'", guid))
            .await
    }
}
