use crate::model::ExtguardConfigV1;
use anyhow::Context;
use extguard_domain::{CollisionPolicy, DependencyRegistry, EffectiveConfig, FailOn};
use extguard_types::Severity;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub severity: Option<String>,
    pub fail_on: Option<String>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub registry: DependencyRegistry,
}

pub fn resolve_config(
    cfg: ExtguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut effective = EffectiveConfig::default();

    if let Some(sev) = overrides.severity.as_deref().or(cfg.check.severity.as_deref()) {
        effective.severity = parse_severity(sev).context("invalid check.severity")?;
    }

    if let Some(fail_on) = overrides.fail_on.as_deref().or(cfg.check.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on).context("invalid check.fail_on")?;
    }

    if let Some(mf) = overrides.max_findings.or(cfg.check.max_findings) {
        effective.max_findings = mf as usize;
    }

    if let Some(mode) = cfg.check.on_duplicate_constant.as_deref() {
        effective.on_duplicate_constant =
            parse_collision_policy(mode).context("invalid check.on_duplicate_constant")?;
    }

    let registry =
        DependencyRegistry::new(cfg.external_dependencies, effective.on_duplicate_constant)
            .context("build external dependency registry")?;

    Ok(ResolvedConfig {
        effective,
        registry,
    })
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}

fn parse_collision_policy(v: &str) -> anyhow::Result<CollisionPolicy> {
    match v {
        "last-wins" => Ok(CollisionPolicy::LastWins),
        "reject" => Ok(CollisionPolicy::Reject),
        other => {
            anyhow::bail!("unknown on_duplicate_constant: {other} (expected last-wins|reject)")
        }
    }
}
