//! Organization data models

use serde::Deserialize;

use crate::cf::ResourceMetadata;

/// Organization from the v2 get-by-guid endpoint
#[derive(Deserialize, Debug, Clone)]
pub struct OrgResource {
    pub metadata: ResourceMetadata,
    pub entity: OrgEntity,
}

/// Organization entity fields used by the report
#[derive(Deserialize, Debug, Clone)]
pub struct OrgEntity {
    pub name: String,
}

impl OrgResource {
    /// Organization guid
    pub fn guid(&self) -> &str {
        &self.metadata.guid
    }

    /// Organization name
    pub fn name(&self) -> &str {
        &self.entity.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_deserialization() {
        let json = r#"{
            "metadata": {"guid": "org-1", "url": "/v2/organizations/org-1"},
            "entity": {"name": "acme"}
        }"#;

        let org: OrgResource = serde_json::from_str(json).unwrap();
        assert_eq!(org.guid(), "org-1");
        assert_eq!(org.name(), "acme");
    }
}
