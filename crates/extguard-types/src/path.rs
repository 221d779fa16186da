use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Canonical repo-relative path used in reference locations and findings.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
///
/// Deserialized values go through the same normalization as [`RepoPath::new`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct RepoPath(String);

impl Default for RepoPath {
    fn default() -> Self {
        RepoPath::new(".")
    }
}

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RepoPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(RepoPath::new)
    }
}

impl From<String> for RepoPath {
    fn from(value: String) -> Self {
        RepoPath::new(value)
    }
}

impl From<&Utf8Path> for RepoPath {
    fn from(value: &Utf8Path) -> Self {
        RepoPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for RepoPath {
    fn from(value: Utf8PathBuf) -> Self {
        RepoPath::new(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_separators_and_leading_dot() {
        assert_eq!(RepoPath::new(".\\packs\\a\\lib.rb").as_str(), "packs/a/lib.rb");
        assert_eq!(RepoPath::new("././app/models").as_str(), "app/models");
        assert_eq!(RepoPath::new("").as_str(), ".");
    }

    #[test]
    fn deserialization_normalizes_like_new() {
        let p: RepoPath = serde_json::from_str(r#"".\\vendor\\redis.rb""#).expect("parse path");
        assert_eq!(p.as_str(), "vendor/redis.rb");

        let p: RepoPath = serde_json::from_str(r#""./packs/a/lib.rb""#).expect("parse path");
        assert_eq!(p, RepoPath::new("packs/a/lib.rb"));
        assert_eq!(
            serde_json::to_string(&p).expect("serialize path"),
            r#""packs/a/lib.rb""#
        );
    }

    #[test]
    fn converts_from_utf8_paths() {
        let p = RepoPath::from(Utf8Path::new("packs/pack1/app.rb"));
        assert_eq!(p.to_string(), "packs/pack1/app.rb");
        assert_eq!(p.to_utf8_pathbuf(), Utf8PathBuf::from("packs/pack1/app.rb"));
    }
}
