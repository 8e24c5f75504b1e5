use std::cmp::Ordering;

use crate::types::recommendation::{RankedProject, RecommendationWhy, ScoredProject};

pub struct RankOutcome<'a> {
    pub projects: Vec<RankedProject<'a>>,
    pub projects_considered: usize,
    pub projects_returned: usize,
}

/// Order scored projects by descending score and keep the first `limit`.
///
/// The sort is stable: projects with equal scores stay in the order the
/// caller supplied them. That tie policy is part of the output contract,
/// not an accident of the sort algorithm.
pub fn rank_top(mut scored: Vec<ScoredProject<'_>>, limit: usize) -> RankOutcome<'_> {
    let projects_considered = scored.len();

    // Descending score; Equal for ties keeps the stable sort's input order.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit);

    debug_assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));

    let projects: Vec<RankedProject<'_>> = scored
        .into_iter()
        .map(|entry| RankedProject {
            project: entry.project,
            score: entry.score,
            why: RecommendationWhy {
                matched_terms: entry.details.matched_terms,
                project_term_count: entry.details.project_term_count,
            },
        })
        .collect();

    let projects_returned = projects.len();

    RankOutcome {
        projects,
        projects_considered,
        projects_returned,
    }
}
