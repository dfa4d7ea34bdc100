//! Pagination-enrichment walker
//!
//! Pages through the applications list and flattens each application into
//! one report row, enriched with its owning space, organization, and v3
//! annotations.

use log::{debug, info};
use std::collections::HashMap;

use crate::cf::{AppResource, CfClient, OrgResource, SpaceResource};
use crate::config::api;
use crate::output::{format_annotations, ReportRow};

/// Per-run memoization of successful space and organization lookups.
///
/// Applications sharing a space would otherwise repeat the same two
/// round-trips per application. Failed lookups are not cached.
#[derive(Default)]
struct EnrichmentCache {
    spaces: HashMap<String, SpaceResource>,
    orgs: HashMap<String, OrgResource>,
}

/// Walk the full application inventory, one page at a time.
///
/// Each produced row is echoed to stdout as it is built. A failed page
/// request ends the walk and returns the rows accumulated so far; a failed
/// enrichment lookup degrades the affected fields to empty values and the
/// walk continues.
pub async fn collect_inventory(client: &CfClient) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    let mut cache = EnrichmentCache::default();
    let mut page = 1;

    loop {
        let apps = match client.list_applications(page, api::PAGE_SIZE).await {
            Ok(apps) => apps,
            Err(e) => {
                println!("Error getting applications page {}: {}", page, e);
                return rows;
            }
        };
        let page_len = apps.len();
        debug!("Processing {} applications from page {}", page_len, page);

        for app in apps {
            let row = build_row(client, &app, &mut cache).await;
            println!("{}", row.to_csv_line());
            rows.push(row);
        }

        // An under-full page is the last one
        if (page_len as u32) < api::PAGE_SIZE {
            break;
        }
        page += 1;
    }

    info!("Collected {} applications over {} page(s)", rows.len(), page);
    rows
}

/// Flatten one application into a report row
async fn build_row(
    client: &CfClient,
    app: &AppResource,
    cache: &mut EnrichmentCache,
) -> ReportRow {
    let (space_name, org_guid) = resolve_space(client, app.space_guid(), cache).await;
    let org_name = resolve_organization(client, &org_guid, cache).await;

    let metadata = match client.get_application_detail(app.guid()).await {
        Ok(detail) => format_annotations(&detail.metadata.annotations),
        Err(e) => {
            debug!("Could not fetch detail for application '{}': {}", app.guid(), e);
            String::new()
        }
    };

    ReportRow {
        foundation: client.api_address().to_string(),
        app_name: app.name().to_string(),
        organization: org_name,
        space: space_name,
        instances: app.instances(),
        state: app.state().to_string(),
        metadata,
    }
}

/// Resolve a space name and its owning organization guid, via the cache.
///
/// An empty guid or a failed lookup yields empty values.
async fn resolve_space(
    client: &CfClient,
    space_guid: &str,
    cache: &mut EnrichmentCache,
) -> (String, String) {
    if space_guid.is_empty() {
        return (String::new(), String::new());
    }

    if let Some(space) = cache.spaces.get(space_guid) {
        return (
            space.name().to_string(),
            space.organization_guid().to_string(),
        );
    }

    match client.get_space(space_guid).await {
        Ok(space) => {
            let resolved = (
                space.name().to_string(),
                space.organization_guid().to_string(),
            );
            cache.spaces.insert(space_guid.to_string(), space);
            resolved
        }
        Err(e) => {
            debug!("Could not fetch space '{}': {}", space_guid, e);
            (String::new(), String::new())
        }
    }
}

/// Resolve an organization name via the cache; empty on failure
async fn resolve_organization(
    client: &CfClient,
    org_guid: &str,
    cache: &mut EnrichmentCache,
) -> String {
    if org_guid.is_empty() {
        return String::new();
    }

    if let Some(org) = cache.orgs.get(org_guid) {
        return org.name().to_string();
    }

    match client.get_organization(org_guid).await {
        Ok(org) => {
            let name = org.name().to_string();
            cache.orgs.insert(org_guid.to_string(), org);
            name
        }
        Err(e) => {
            debug!("Could not fetch organization '{}': {}", org_guid, e);
            String::new()
        }
    }
}
