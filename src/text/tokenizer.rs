use serde::{Deserialize, Serialize};

/// A normalized index term: non-empty, lowercase, whitespace-free, and
/// restricted to alphanumerics and hyphens.
///
/// Terms are produced by [`tokenize`], which enforces those invariants. The
/// ordering derives keep every downstream term map iterating in a stable
/// order, which the scoring pipeline relies on for reproducible output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term(String);

impl Term {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Split free text into index terms.
///
/// Lowercases the input, strips every character that is neither alphanumeric
/// nor a hyphen, splits on whitespace runs, and drops tokens that strip down
/// to nothing. Malformed or empty input yields an empty sequence, never an
/// error. Re-tokenizing the space-joined output is a no-op.
pub fn tokenize(text: &str) -> Vec<Term> {
    text.to_lowercase()
        .split_whitespace()
        .filter_map(|word| {
            let cleaned: String = word
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '-')
                .collect();
            if cleaned.is_empty() {
                None
            } else {
                Some(Term(cleaned))
            }
        })
        .collect()
}
