use serde::{Deserialize, Serialize};

use crate::types::identifiers::ProjectId;

/// One recommendable project: a repository listing or a user submission.
///
/// Immutable input to the engine. Scoring reads [`Project::search_text`];
/// nothing here is mutated or copied into the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    pub fn new<I, S>(
        id: impl Into<ProjectId>,
        name: impl Into<String>,
        description: impl Into<String>,
        tags: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Project {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// The text the engine scores: name, description, and tags joined with
    /// single spaces. Empty fields survive the join but tokenize to nothing.
    pub fn search_text(&self) -> String {
        let mut parts = Vec::with_capacity(2 + self.tags.len());
        parts.push(self.name.as_str());
        parts.push(self.description.as_str());
        parts.extend(self.tags.iter().map(String::as_str));

        parts.join(" ")
    }
}
