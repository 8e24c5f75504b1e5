//! Deterministic TF-IDF engine for matching developer skills to projects.
//!
//! `devmatch-core` provides text normalization, corpus-wide IDF statistics,
//! TF-IDF scoring with per-term explanations, and stable top-N ranking. All
//! operations are deterministic: identical inputs always produce identical
//! outputs, byte-for-byte, with no I/O and no cross-call state.
//!
//! See <https://github.com/devmatchhq/devmatch> for the full platform.

pub mod project;
pub mod ranking;
pub mod text;
pub mod types;
