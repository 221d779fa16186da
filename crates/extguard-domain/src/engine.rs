use crate::checker::Checker;
use crate::fingerprint::fingerprint_for_reference;
use crate::policy::{EffectiveConfig, FailOn};
use crate::registry::DependencyRegistry;
use extguard_types::{ids, ExtguardData, Finding, Reference, Severity, Verdict};
use rayon::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;

/// Outcome of evaluating one batch of references.
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: ExtguardData,
}

/// Evaluate a batch of references and collect one finding per violation.
///
/// `checker` decides and renders; `registry` supplies the dependency key recorded on each
/// finding. References are judged in parallel and neither argument is ever written.
pub fn evaluate(
    references: &[Reference],
    checker: &dyn Checker,
    registry: &DependencyRegistry,
    cfg: &EffectiveConfig,
) -> Evaluation {
    let mut findings: Vec<Finding> = references
        .par_iter()
        .filter(|r| checker.is_invalid(r))
        .map(|r| finding_for(r, checker, registry, cfg))
        .collect();

    let tracked = references
        .par_iter()
        .filter(|r| registry.lookup_key(&r.constant.name).is_some())
        .count();

    // Deterministic ordering before truncation.
    findings.sort_by(compare_findings);

    let mut violations_by_dependency: BTreeMap<String, u32> = BTreeMap::new();
    let mut violations_by_package: BTreeMap<String, u32> = BTreeMap::new();
    for f in &findings {
        if let Some(key) = f.data["dependency_key"].as_str() {
            *violations_by_dependency.entry(key.to_string()).or_default() += 1;
        }
        if let Some(source) = f.data["source_package"].as_str() {
            *violations_by_package.entry(source.to_string()).or_default() += 1;
        }
    }

    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let data = ExtguardData {
        registry_size: registry.len() as u32,
        references_scanned: references.len() as u32,
        references_tracked: tracked as u32,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        violations_by_dependency,
        violations_by_package,
        truncated_reason,
    };

    Evaluation {
        verdict: compute_verdict(&emitted, cfg.fail_on),
        findings: emitted,
        data,
    }
}

fn finding_for(
    reference: &Reference,
    checker: &dyn Checker,
    registry: &DependencyRegistry,
    cfg: &EffectiveConfig,
) -> Finding {
    let constant = &reference.constant;
    let source = &reference.source_package.name;

    Finding {
        severity: cfg.severity,
        check_id: ids::CHECK_BOUNDARY_EXTERNAL_DEPENDENCY.to_string(),
        code: ids::CODE_UNDECLARED_EXTERNAL_DEPENDENCY.to_string(),
        message: checker.render(reference),
        location: Some(constant.location.clone()),
        help: Some(format!(
            "Declare the dependency in '{source}' or reach '{}' through a package that already does.",
            constant.package
        )),
        url: Some(ids::TROUBLESHOOT_URL.to_string()),
        fingerprint: Some(fingerprint_for_reference(
            ids::CHECK_BOUNDARY_EXTERNAL_DEPENDENCY,
            ids::CODE_UNDECLARED_EXTERNAL_DEPENDENCY,
            source,
            &constant.name,
            constant.location.path.as_str(),
        )),
        data: json!({
            "violation_type": checker.violation_type(),
            "constant": constant.name,
            "constant_package": constant.package,
            "source_package": source,
            "dependency_key": registry.lookup_key(&constant.name),
        }),
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location.path (missing last)
    // 3) location.line (missing last)
    // 4) constant
    // 5) source package
    // 6) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let (ap, al) = match &a.location {
        Some(l) => (l.path.as_str(), l.line.unwrap_or(u32::MAX)),
        None => ("~", u32::MAX),
    };
    let (bp, bl) = match &b.location {
        Some(l) => (l.path.as_str(), l.line.unwrap_or(u32::MAX)),
        None => ("~", u32::MAX),
    };
    let data_str = |f: &Finding, field: &str| f.data[field].as_str().unwrap_or("").to_string();

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(ap.cmp(bp))
        .then(al.cmp(&bl))
        .then_with(|| data_str(a, "constant").cmp(&data_str(b, "constant")))
        .then_with(|| data_str(a, "source_package").cmp(&data_str(b, "source_package")))
        .then_with(|| a.message.cmp(&b.message))
}
