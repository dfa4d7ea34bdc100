//! CF API client module
//!
//! This module provides functionality to interact with the Cloud Foundry
//! cloud controller API.

pub mod applications;
mod client;
pub mod organizations;
pub mod spaces;

use serde::Deserialize;

pub use applications::{AppDetail, AppResource};
pub use client::CfClient;
pub use organizations::OrgResource;
pub use spaces::SpaceResource;

/// v2 resource envelope metadata (shared across resources)
#[derive(Deserialize, Debug, Clone)]
pub struct ResourceMetadata {
    pub guid: String,
    pub url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Generic v2 list response wrapper for paginated endpoints
#[derive(Deserialize, Debug)]
pub struct PageResponse<T> {
    pub total_results: Option<u32>,
    pub total_pages: Option<u32>,
    pub resources: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_deserialization() {
        let response: PageResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "total_results": 2,
                "total_pages": 1,
                "resources": [{"id": "a"}, {"id": "b"}]
            }))
            .unwrap();
        assert_eq!(response.total_results, Some(2));
        assert_eq!(response.resources.len(), 2);
    }

    #[test]
    fn test_page_response_without_totals() {
        let response: PageResponse<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "resources": []
            }))
            .unwrap();
        assert!(response.total_results.is_none());
        assert!(response.resources.is_empty());
    }

    #[test]
    fn test_resource_metadata_deserialization() {
        let meta: ResourceMetadata = serde_json::from_value(serde_json::json!({
            "guid": "abc-123",
            "url": "/v2/apps/abc-123"
        }))
        .unwrap();
        assert_eq!(meta.guid, "abc-123");
        assert_eq!(meta.url.as_deref(), Some("/v2/apps/abc-123"));
        assert!(meta.created_at.is_none());
    }
}
