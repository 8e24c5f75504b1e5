use std::collections::{BTreeMap, BTreeSet};

use super::tokenizer::Term;

/// Raw term frequency for a single document.
///
/// Every stored count is at least 1; absent terms read as 0. The `BTreeMap`
/// keeps iteration in term order so float accumulation downstream happens in
/// a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermCounts {
    counts: BTreeMap<Term, usize>,
}

impl TermCounts {
    /// Count occurrences of each distinct term in one document.
    pub fn from_terms(terms: &[Term]) -> Self {
        let mut counts = BTreeMap::new();
        for term in terms {
            *counts.entry(term.clone()).or_insert(0) += 1;
        }
        TermCounts { counts }
    }

    /// Occurrences of `term` in the document; 0 when absent.
    pub fn get(&self, term: &Term) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &Term) -> bool {
        self.counts.contains_key(term)
    }

    /// Number of distinct terms in the document.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(term, count)` pairs in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&Term, usize)> {
        self.counts.iter().map(|(term, &count)| (term, count))
    }
}

/// Inverse document frequency over one corpus snapshot.
///
/// Built once per recommendation pass from the full document set, query
/// document included, and shared read-only across every scoring step. A
/// term's weight is `ln(N / df)`; `df` is at least 1 for any stored term, so
/// the ratio is always defined. A single-document corpus collapses every
/// weight to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusIdf {
    weights: BTreeMap<Term, f64>,
    document_count: usize,
}

impl CorpusIdf {
    /// Compute document frequencies over the distinct term set of each
    /// document, then transform each to `ln(N / df)`.
    pub fn build(documents: &[&[Term]]) -> Self {
        let document_count = documents.len();
        let mut frequencies: BTreeMap<Term, usize> = BTreeMap::new();
        for document in documents {
            let distinct: BTreeSet<&Term> = document.iter().collect();
            for term in distinct {
                *frequencies.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let n = document_count as f64;
        let weights = frequencies
            .into_iter()
            .map(|(term, df)| {
                debug_assert!(df >= 1 && df <= document_count);
                (term, (n / df as f64).ln())
            })
            .collect();

        CorpusIdf {
            weights,
            document_count,
        }
    }

    /// IDF weight of `term`; 0.0 when the term occurs in no document.
    pub fn weight(&self, term: &Term) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Number of documents the statistics were computed over.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Number of distinct terms across the corpus.
    pub fn vocabulary_len(&self) -> usize {
        self.weights.len()
    }

    /// Iterate `(term, weight)` pairs in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&Term, f64)> {
        self.weights.iter().map(|(term, &weight)| (term, weight))
    }
}
