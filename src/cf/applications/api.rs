//! Application API operations

use log::debug;

use crate::cf::{CfClient, PageResponse};
use crate::config::api;
use crate::error::Result;

use super::models::{AppDetail, AppResource};

impl CfClient {
    /// Fetch one page of applications from the v2 list endpoint.
    ///
    /// Ordering is server-defined and stable only within a single run.
    pub async fn list_applications(&self, page: u32, page_size: u32) -> Result<Vec<AppResource>> {
        let url = self.url(api::APPS);
        debug!("Fetching applications page {} from: {}", page, url);

        let response = self
            .get(&url)
            .query(&[
                ("page", page.to_string()),
                ("results-per-page", page_size.to_string()),
            ])
            .send()
            .await?;

        let page_response: PageResponse<AppResource> = self
            .parse_api_response(response, &format!("applications (page {})", page))
            .await?;

        debug!(
            "Page {} returned {} applications",
            page,
            page_response.resources.len()
        );
        Ok(page_response.resources)
    }

    /// Fetch the v3 application record carrying the annotation map
    pub async fn get_application_detail(&self, guid: &str) -> Result<AppDetail> {
        let url = format!("{}/{}", self.url(api::APPS_V3), guid);
        debug!("Fetching application detail from: {}", url);

        let response = self.get(&url).send().await?;
        self.parse_api_response(response, &format!("application '{}'", guid))
            .await
    }
}
