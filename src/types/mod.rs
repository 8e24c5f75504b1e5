//! Shared types crossing module boundaries.

pub mod identifiers;
pub mod recommendation;

pub use identifiers::{CorpusFingerprint, ProjectId};
pub use recommendation::{
    RankedProject, Recommendation, RecommendationMetadata, RecommendationWhy, RecommendError,
    ScoreDetails, ScoredProject, SkillProfile, TermWeight,
};
