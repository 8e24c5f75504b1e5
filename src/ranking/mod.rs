pub mod ranker;
pub mod scorer;

use crate::project::Project;
use crate::text::stats::CorpusIdf;
use crate::text::tokenizer::{tokenize, Term};
use crate::types::recommendation::{
	Recommendation, RecommendationMetadata, RecommendError, ScoredProject, SkillProfile,
};
pub use ranker::{rank_top, RankOutcome};
pub use scorer::{Scorer, TfIdfScorer};

/// Projects returned when the caller does not pick a limit.
pub const DEFAULT_LIMIT: usize = 5;

/// The engine's entry point.
///
/// Stateless: every call tokenizes, builds corpus statistics, scores, and
/// ranks from scratch, so concurrent calls over shared inputs are
/// independent. The scoring strategy is pluggable through [`Scorer`];
/// [`TfIdfScorer`] is the engine's own algorithm.
pub struct Recommender<S> {
	scorer: S,
}

impl Default for Recommender<TfIdfScorer> {
	fn default() -> Self {
		Self {
			scorer: TfIdfScorer,
		}
	}
}

impl<S> Recommender<S>
where
	S: Scorer,
{
	pub fn new(scorer: S) -> Self {
		Self { scorer }
	}

	/// Rank `projects` against `profile` and return the top [`DEFAULT_LIMIT`].
	pub fn recommend<'a>(
		&self,
		profile: &SkillProfile,
		projects: &'a [Project],
	) -> Result<Recommendation<'a>, RecommendError> {
		self.recommend_top(profile, projects, DEFAULT_LIMIT)
	}

	/// Rank `projects` against `profile` and return at most `limit` of them.
	///
	/// Pure function of its inputs: identical profile, projects, and limit
	/// always produce an identical result, and the inputs are never mutated.
	/// `limit` must be positive.
	pub fn recommend_top<'a>(
		&self,
		profile: &SkillProfile,
		projects: &'a [Project],
		limit: usize,
	) -> Result<Recommendation<'a>, RecommendError> {
		if limit == 0 {
			return Err(RecommendError::InvalidLimit(limit));
		}

		// 1. Tokenization Phase
		let project_terms: Vec<Vec<Term>> = projects
			.iter()
			.map(|project| tokenize(&project.search_text()))
			.collect();

		// 2. Statistics Phase
		// The skill document joins the corpus so every query term has a
		// document frequency of at least 1.
		let mut documents: Vec<&[Term]> = project_terms.iter().map(Vec::as_slice).collect();
		documents.push(profile.terms.as_slice());
		let idf = CorpusIdf::build(&documents);

		// 3. Scoring Phase
		let scored: Vec<ScoredProject> = projects
			.iter()
			.zip(project_terms.iter())
			.map(|(project, terms)| {
				let details = self.scorer.score(&profile.terms, terms, &idf);
				let score = self.scorer.score_value(&details);
				ScoredProject {
					project,
					score,
					details,
				}
			})
			.collect();

		// 4. Ranking Phase
		let outcome = rank_top(scored, limit);

		let metadata = RecommendationMetadata {
			skills: profile.skills.clone(),
			skill_terms: profile.terms.clone(),
			limit,
			corpus_size: idf.document_count(),
			projects_considered: outcome.projects_considered,
			projects_returned: outcome.projects_returned,
		};

		Ok(Recommendation {
			projects: outcome.projects,
			metadata,
		})
	}
}
