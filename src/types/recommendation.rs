use serde::Serialize;

use crate::project::Project;
use crate::text::{tokenize, Term};

/// A user's self-reported skills, normalized into query terms.
/// Normalization rules:
/// - Skills joined with spaces, then tokenized like any project document
/// - Empty or symbol-only skills contribute no terms
/// - An empty profile is valid and scores every project at 0.0
#[derive(Debug, Clone)]
pub struct SkillProfile {
    pub skills: Vec<String>,
    pub terms: Vec<Term>,
}

impl SkillProfile {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let skills: Vec<String> = skills.into_iter().map(Into::into).collect();
        let terms = tokenize(&skills.join(" "));

        Self { skills, terms }
    }
}

/// A recommended project returned in the output.
/// Borrows the caller's record: the output contains the same project values
/// that came in, reordered and truncated, never copies.
#[derive(Debug, Clone, Serialize)]
pub struct RankedProject<'a> {
    pub project: &'a Project,

    pub score: f64,

    pub why: RecommendationWhy,
}

/// Explanation for why a project received its score.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct RecommendationWhy {
    pub matched_terms: Vec<TermWeight>,
    pub project_term_count: usize,
}

/// One matched term with its accumulated contribution to the score.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct TermWeight {
    pub term: Term,
    pub weight: f64,
}

/// Metadata describing the outcome of one recommendation pass.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct RecommendationMetadata {
    pub skills: Vec<String>,
    pub skill_terms: Vec<Term>,
    pub limit: usize,

    /// Documents the IDF statistics covered: every project plus the skill
    /// document itself.
    pub corpus_size: usize,

    pub projects_considered: usize,
    pub projects_returned: usize,
}

/// The final result of a recommendation operation.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub projects: Vec<RankedProject<'a>>,
    pub metadata: RecommendationMetadata,
}

impl<'a> Recommendation<'a> {
    /// The recommended records themselves, highest score first.
    pub fn top_projects(&self) -> Vec<&'a Project> {
        self.projects.iter().map(|entry| entry.project).collect()
    }
}

/// Internal: A project that has been scored but not yet ranked.
/// Holds a reference to the original record to avoid cloning prematurely.
#[derive(Debug, Clone)]
pub struct ScoredProject<'a> {
    pub project: &'a Project,

    pub score: f64,
    pub details: ScoreDetails,
}

/// Internal: Detailed scoring components before assembly into the output.
#[derive(Debug, Clone)]
pub struct ScoreDetails {
    pub matched_terms: Vec<TermWeight>,
    pub project_term_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("Invalid limit: {0}")]
    InvalidLimit(usize),
}
