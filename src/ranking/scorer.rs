use crate::text::stats::{CorpusIdf, TermCounts};
use crate::text::tokenizer::Term;
use crate::types::recommendation::{ScoreDetails, TermWeight};

pub trait Scorer {
    fn score(&self, skill_terms: &[Term], project_terms: &[Term], idf: &CorpusIdf) -> ScoreDetails;

    fn score_value(&self, details: &ScoreDetails) -> f64 {
        let score: f64 = details.matched_terms.iter().map(|m| m.weight).sum();
        debug_assert!(score >= 0.0, "score {score} must be non-negative");
        score
    }
}

/// v0: Dot-product TF-IDF similarity over the query/document intersection.
///
/// Not length-normalized: scores are unbounded above and comparable only
/// within a single pass over one corpus.
#[derive(Default)]
pub struct TfIdfScorer;

impl Scorer for TfIdfScorer {
    fn score(&self, skill_terms: &[Term], project_terms: &[Term], idf: &CorpusIdf) -> ScoreDetails {
        let skill_counts = TermCounts::from_terms(skill_terms);
        let project_counts = TermCounts::from_terms(project_terms);

        // Accumulate tf(query) * tf(project) * idf over shared terms, in
        // term order. Terms the project lacks contribute nothing; so do
        // terms present in every document, whose idf is 0.
        let mut matched_terms = Vec::new();
        for (term, skill_count) in skill_counts.iter() {
            let project_count = project_counts.get(term);
            if project_count == 0 {
                continue;
            }

            let weight = idf.weight(term);
            if weight == 0.0 {
                continue;
            }

            matched_terms.push(TermWeight {
                term: term.clone(),
                weight: skill_count as f64 * project_count as f64 * weight,
            });
        }

        ScoreDetails {
            matched_terms,
            project_term_count: project_terms.len(),
        }
    }
}
