//! Use case orchestration for extguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings and domain
//! layers with the filesystem. It is intentionally thin; a host runner owns scheduling and
//! supplies references, this crate only loads configuration and packages results.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod report;
mod schema;

pub use check::{
    build_checker, load_config_text, run_check, verdict_exit_code, CheckInput, CheckOutput,
    DEFAULT_CONFIG_FILE,
};
pub use explain::explain;
pub use report::{parse_references_json, parse_report_json, serialize_report, write_report};
pub use schema::{emit_schemas, schema_specs, serialize_schema, SchemaSpec};
