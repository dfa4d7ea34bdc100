//! cfdump - Export a Cloud Foundry application inventory snapshot
//!
//! A CLI tool that logs in to a CF foundation, pages through every deployed
//! application, and writes one flat CSV row per application.
//!
//! # Features
//!
//! - Single password-grant login against the foundation's UAA
//! - Paged application listing (50 per page)
//! - Per-application enrichment: space, organization, v3 annotations
//! - Per-run memoization of space and organization lookups
//! - Timestamped `cf-app-dump-<YYYYMMDDHHMMSS>.csv` report
//!
//! # Example
//!
//! ```bash
//! # Dump using ./config.yml
//! cfdump
//!
//! # Explicit config path, verbose logging
//! cfdump --config /etc/cfdump/config.yml --log-level debug
//! ```

pub mod cf;
pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod output;
pub mod settings;

pub use cf::{AppDetail, AppResource, CfClient, OrgResource, SpaceResource};
pub use cli::Cli;
pub use error::{CfError, Result};
pub use inventory::collect_inventory;
pub use output::{format_annotations, header_line, report_file_name, write_report, ReportRow};
pub use settings::{Endpoint, Settings};
