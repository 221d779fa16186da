//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{CheckConfig, ExtguardConfigV1};
pub use resolve::{Overrides, ResolvedConfig};

use anyhow::Context;
use extguard_types::PackageConfig;

/// Parse `extguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ExtguardConfigV1> {
    let cfg: ExtguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Build the dependency registry and run settings (config + overrides).
pub fn resolve_config(
    cfg: ExtguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// Parse a package's own configuration from TOML.
pub fn parse_package_config_toml(input: &str) -> anyhow::Result<PackageConfig> {
    toml::from_str(input).context("parse package config (toml)")
}

/// Parse a package's own configuration from JSON, as handed over by a host runner.
pub fn parse_package_config_json(input: &str) -> anyhow::Result<PackageConfig> {
    serde_json::from_str(input).context("parse package config (json)")
}
