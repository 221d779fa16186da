//! The `check` use case: load the registry, evaluate references, produce a report.

use anyhow::Context;
use camino::Utf8Path;
use extguard_domain::ExternalDependencyChecker;
use extguard_settings::{Overrides, ResolvedConfig};
use extguard_types::{
    ExtguardReport, Reference, ReportEnvelope, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

/// Conventional name of the workspace config file holding the registry.
pub const DEFAULT_CONFIG_FILE: &str = "extguard.toml";

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config document contents (empty string means an empty registry).
    pub config_text: &'a str,
    /// Caller overrides for run settings.
    pub overrides: Overrides,
    /// References produced by the host's reference-graph builder.
    pub references: &'a [Reference],
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: ExtguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Read the config document at an explicit path.
///
/// A missing or unreadable file is an error: there is no degraded mode without a registry.
pub fn load_config_text(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read config {path}"))
}

/// Parse and resolve a config document into a ready checker.
pub fn build_checker(
    config_text: &str,
    overrides: Overrides,
) -> anyhow::Result<(ExternalDependencyChecker, ResolvedConfig)> {
    let cfg = if config_text.trim().is_empty() {
        extguard_settings::ExtguardConfigV1::default()
    } else {
        extguard_settings::parse_config_toml(config_text).context("parse config")?
    };

    let resolved = extguard_settings::resolve_config(cfg, overrides).context("resolve config")?;
    let checker = ExternalDependencyChecker::new(resolved.registry.clone());
    Ok((checker, resolved))
}

/// Run the check use case over a batch of references.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let (checker, resolved) = build_checker(input.config_text, input.overrides)?;

    let evaluation = extguard_domain::evaluate(
        input.references,
        &checker,
        &resolved.registry,
        &resolved.effective,
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "extguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: evaluation.verdict,
        findings: evaluation.findings,
        data: evaluation.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
