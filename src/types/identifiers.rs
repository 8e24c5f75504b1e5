use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::project::Project;

/// Opaque project identity, as supplied by the serving layer.
///
/// Repository ids arrive already stringified. The engine never parses them
/// and never deduplicates on them; two records sharing an id are scored and
/// ranked as two independent projects.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        ProjectId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        ProjectId(id.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        ProjectId(id)
    }
}

/// Content hash of an ordered project corpus.
///
/// The engine recomputes every statistic on each call; callers that memoize
/// results own that cache and key it with this digest. Input order
/// participates in the digest because tie-breaking, and therefore output,
/// depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorpusFingerprint(String);

impl CorpusFingerprint {
    /// Digest every field of every project in input order, with NUL bytes
    /// separating fields and records.
    pub fn of(projects: &[Project]) -> Self {
        let mut hasher = Sha256::new();
        for project in projects {
            hasher.update(project.id.as_str().as_bytes());
            hasher.update([0u8]);
            hasher.update(project.name.as_bytes());
            hasher.update([0u8]);
            hasher.update(project.description.as_bytes());
            hasher.update([0u8]);
            for tag in &project.tags {
                hasher.update(tag.as_bytes());
                hasher.update([0u8]);
            }
            hasher.update([0u8]);
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        CorpusFingerprint(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
