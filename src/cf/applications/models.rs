//! Application data models

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::cf::ResourceMetadata;

/// Application from the v2 list endpoint
#[derive(Deserialize, Debug, Clone)]
pub struct AppResource {
    pub metadata: ResourceMetadata,
    pub entity: AppEntity,
}

/// Application entity fields used by the report
#[derive(Deserialize, Debug, Clone)]
pub struct AppEntity {
    pub name: String,
    pub space_guid: Option<String>,
    pub instances: Option<u32>,
    pub state: Option<String>,
}

/// Application detail from the v3 endpoint
///
/// Only the metadata block is consumed; labels are carried by the API but
/// not exported.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct AppDetail {
    pub guid: Option<String>,
    #[serde(default)]
    pub metadata: AppMetadata,
}

/// v3 application metadata block
#[derive(Deserialize, Debug, Default, Clone)]
pub struct AppMetadata {
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
}

impl AppResource {
    /// Application guid
    pub fn guid(&self) -> &str {
        &self.metadata.guid
    }

    /// Application name
    pub fn name(&self) -> &str {
        &self.entity.name
    }

    /// Owning space guid, empty when absent
    pub fn space_guid(&self) -> &str {
        self.entity.space_guid.as_deref().unwrap_or("")
    }

    /// Configured instance count, zero when absent
    pub fn instances(&self) -> u32 {
        self.entity.instances.unwrap_or(0)
    }

    /// Lifecycle state as reported by the server (e.g. STARTED, STOPPED)
    pub fn state(&self) -> &str {
        self.entity.state.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_app() -> AppResource {
        AppResource {
            metadata: ResourceMetadata {
                guid: "app-123".to_string(),
                url: Some("/v2/apps/app-123".to_string()),
                created_at: None,
                updated_at: None,
            },
            entity: AppEntity {
                name: "billing-api".to_string(),
                space_guid: Some("space-9".to_string()),
                instances: Some(3),
                state: Some("STARTED".to_string()),
            },
        }
    }

    #[test]
    fn test_app_accessors() {
        let app = create_test_app();
        assert_eq!(app.guid(), "app-123");
        assert_eq!(app.name(), "billing-api");
        assert_eq!(app.space_guid(), "space-9");
        assert_eq!(app.instances(), 3);
        assert_eq!(app.state(), "STARTED");
    }

    #[test]
    fn test_app_defaults() {
        let app = AppResource {
            metadata: ResourceMetadata {
                guid: "app-1".to_string(),
                url: None,
                created_at: None,
                updated_at: None,
            },
            entity: AppEntity {
                name: "bare".to_string(),
                space_guid: None,
                instances: None,
                state: None,
            },
        };
        assert_eq!(app.space_guid(), "");
        assert_eq!(app.instances(), 0);
        assert_eq!(app.state(), "");
    }

    #[test]
    fn test_app_deserialization() {
        let json = r#"{
            "metadata": {"guid": "app-abc", "url": "/v2/apps/app-abc"},
            "entity": {
                "name": "frontend",
                "space_guid": "space-1",
                "instances": 2,
                "state": "STOPPED"
            }
        }"#;

        let app: AppResource = serde_json::from_str(json).unwrap();
        assert_eq!(app.guid(), "app-abc");
        assert_eq!(app.state(), "STOPPED");
    }

    #[test]
    fn test_app_detail_deserialization() {
        let json = r#"{
            "guid": "app-abc",
            "name": "frontend",
            "metadata": {
                "labels": {"team": "web"},
                "annotations": {"owner": "alice", "contact": "web@example.com"}
            }
        }"#;

        let detail: AppDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.metadata.annotations.len(), 2);
        assert_eq!(
            detail.metadata.annotations.get("owner").map(String::as_str),
            Some("alice")
        );
    }

    #[test]
    fn test_app_detail_annotations_sorted_by_key() {
        let json = r#"{
            "guid": "app-abc",
            "metadata": {"annotations": {"zeta": "1", "alpha": "2", "mid": "3"}}
        }"#;

        let detail: AppDetail = serde_json::from_str(json).unwrap();
        let keys: Vec<&String> = detail.metadata.annotations.keys().collect();
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_app_detail_without_metadata() {
        let detail: AppDetail = serde_json::from_str(r#"{"guid": "app-1"}"#).unwrap();
        assert!(detail.metadata.annotations.is_empty());
        assert!(detail.metadata.labels.is_empty());
    }
}
