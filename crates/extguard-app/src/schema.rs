//! JSON Schema emission for the report, the workspace config, and host-supplied inputs.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use extguard_types::{ExtguardReport, PackageConfig, Reference};
use schemars::schema_for;

/// Schema definition with its target filename.
pub struct SchemaSpec {
    pub filename: &'static str,
    pub generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(ExtguardReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(extguard_settings::ExtguardConfigV1)
}

fn generate_references_schema() -> schemars::Schema {
    schema_for!(Vec<Reference>)
}

fn generate_package_config_schema() -> schemars::Schema {
    schema_for!(PackageConfig)
}

pub fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "extguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "extguard.config.v1.json",
            generate: generate_config_schema,
        },
        SchemaSpec {
            filename: "extguard.references.v1.json",
            generate: generate_references_schema,
        },
        SchemaSpec {
            filename: "extguard.package-config.v1.json",
            generate: generate_package_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
pub fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Write every schema into `dir`, creating it if needed. Returns the written paths.
pub fn emit_schemas(dir: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("create schema dir {dir}"))?;

    let mut written = Vec::new();
    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        std::fs::write(&path, json).with_context(|| format!("write schema {path}"))?;
        written.push(path);
    }
    Ok(written)
}
