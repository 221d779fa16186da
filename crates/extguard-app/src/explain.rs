//! The `explain` use case: describe the external-dependency check for a terminal.

use anyhow::bail;
use extguard_domain::DependencyRegistry;
use extguard_types::explain::{all_check_ids, all_codes, lookup_explanation, Explanation};
use std::fmt::Write;

/// Explain `identifier` (check id, code, or violation type).
///
/// When a registry is supplied, its keys are listed so a reader can see what may be declared.
pub fn explain(identifier: &str, registry: Option<&DependencyRegistry>) -> anyhow::Result<String> {
    let Some(exp) = lookup_explanation(identifier) else {
        let known: Vec<&str> = all_check_ids().iter().chain(all_codes()).copied().collect();
        bail!(
            "unknown check_id or code '{identifier}' (known: {})",
            known.join(", ")
        );
    };
    Ok(render(&exp, registry))
}

fn render(exp: &Explanation, registry: Option<&DependencyRegistry>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}\n{}\n", exp.title, "=".repeat(exp.title.len()));
    let _ = writeln!(out, "{}\n", exp.description);
    let _ = writeln!(out, "How to fix:\n{}\n", exp.remediation);
    let _ = writeln!(out, "Fails:\n{}\n", indent(exp.examples.before));
    let _ = writeln!(out, "Passes:\n{}", indent(exp.examples.after));

    match registry {
        Some(r) if r.is_empty() => {
            let _ = writeln!(out, "\nNo external dependencies are registered.");
        }
        Some(r) => {
            let _ = writeln!(out, "\nRegistered external dependencies:");
            for (key, constant) in r.iter() {
                let _ = writeln!(out, "    {key} = \"{constant}\"");
            }
        }
        None => {}
    }

    out
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|l| format!("    {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}
