//! Text normalization and corpus statistics.

pub mod stats;
pub mod tokenizer;

pub use stats::{CorpusIdf, TermCounts};
pub use tokenizer::{tokenize, Term};
