//! Space data models

use serde::Deserialize;

use crate::cf::ResourceMetadata;

/// Space from the v2 get-by-guid endpoint
#[derive(Deserialize, Debug, Clone)]
pub struct SpaceResource {
    pub metadata: ResourceMetadata,
    pub entity: SpaceEntity,
}

/// Space entity fields used by the report
#[derive(Deserialize, Debug, Clone)]
pub struct SpaceEntity {
    pub name: String,
    pub organization_guid: Option<String>,
}

impl SpaceResource {
    /// Space guid
    pub fn guid(&self) -> &str {
        &self.metadata.guid
    }

    /// Space name
    pub fn name(&self) -> &str {
        &self.entity.name
    }

    /// Owning organization guid, empty when absent
    pub fn organization_guid(&self) -> &str {
        self.entity.organization_guid.as_deref().unwrap_or("")
    }
}
