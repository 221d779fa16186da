//! Dependency registry: short dependency keys mapped to fully qualified constant names.

use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// What to do when two dependency keys name the same constant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Keys are applied in ascending order; the greatest key owns the constant.
    #[default]
    LastWins,
    /// Fail construction.
    Reject,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("external dependencies '{first}' and '{second}' both map to constant '{constant}'")]
    DuplicateConstant {
        constant: String,
        first: String,
        second: String,
    },
}

/// A constant claimed by more than one dependency key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateConstant {
    pub constant: String,
    /// All claiming keys, ascending. The last one owns the constant.
    pub keys: Vec<String>,
}

/// Immutable forward and reverse dependency mapping.
///
/// Built once per run and shared read-only; nothing here mutates after construction.
#[derive(Clone, Debug, Default)]
pub struct DependencyRegistry {
    by_key: BTreeMap<String, String>,
    by_constant: HashMap<String, String>,
    duplicates: Vec<DuplicateConstant>,
}

impl DependencyRegistry {
    pub fn new(
        entries: BTreeMap<String, String>,
        collisions: CollisionPolicy,
    ) -> Result<Self, RegistryError> {
        let registry = Self::index(entries);
        if collisions == CollisionPolicy::Reject
            && let Some(dup) = registry.duplicates.first()
        {
            return Err(RegistryError::DuplicateConstant {
                constant: dup.constant.clone(),
                first: dup.keys[0].clone(),
                second: dup.keys[1].clone(),
            });
        }
        Ok(registry)
    }

    /// Build with the default collision policy (last key wins).
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::index(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    fn index(entries: BTreeMap<String, String>) -> Self {
        let mut by_constant: HashMap<String, String> = HashMap::with_capacity(entries.len());
        let mut claims: BTreeMap<&str, Vec<String>> = BTreeMap::new();

        // Ascending key order makes the surviving key deterministic.
        for (key, constant) in &entries {
            by_constant.insert(constant.clone(), key.clone());
            claims.entry(constant.as_str()).or_default().push(key.clone());
        }

        let duplicates = claims
            .into_iter()
            .filter(|(_, keys)| keys.len() > 1)
            .map(|(constant, keys)| DuplicateConstant {
                constant: constant.to_string(),
                keys,
            })
            .collect();

        Self {
            by_key: entries,
            by_constant,
            duplicates,
        }
    }

    /// Reverse lookup: the dependency key registered for a qualified constant name.
    pub fn lookup_key(&self, constant_name: &str) -> Option<&str> {
        self.by_constant.get(constant_name).map(String::as_str)
    }

    /// Forward lookup: the constant registered under a dependency key.
    pub fn constant_for(&self, key: &str) -> Option<&str> {
        self.by_key.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_key.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Constants claimed by more than one key (only non-empty under `LastWins`).
    pub fn duplicate_constants(&self) -> &[DuplicateConstant] {
        &self.duplicates
    }
}
