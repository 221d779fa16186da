use anyhow::Context;
use camino::Utf8Path;
use extguard_types::{ExtguardReport, Reference};

/// Serialize a report as pretty JSON with a trailing newline.
pub fn serialize_report(report: &ExtguardReport) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(report).context("serialize report")?;
    text.push('\n');
    Ok(text)
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ExtguardReport> {
    serde_json::from_str(text).context("parse report json")
}

pub fn write_report(path: &Utf8Path, report: &ExtguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create report directory {parent}"))?;
    }
    let text = serialize_report(report)?;
    std::fs::write(path, text).with_context(|| format!("write report {path}"))
}

/// Parse a JSON array of references as exported by a reference-graph builder.
pub fn parse_references_json(text: &str) -> anyhow::Result<Vec<Reference>> {
    serde_json::from_str(text).context("parse references json")
}
