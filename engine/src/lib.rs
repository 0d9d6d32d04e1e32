//! In-memory inverted index over a fixed corpus of text documents.
//!
//! Each document is scanned once for keywords, and every keyword maps to a
//! list of (document, frequency) occurrences kept in descending order of
//! frequency. Once the corpus is indexed the index is frozen; the only
//! query it answers is a disjunctive two-keyword search returning up to
//! five document names ranked by frequency.

use serde::{Deserialize, Serialize};

pub mod index;
pub mod keyword;
pub mod query;

pub use index::SearchIndex;

/// One keyword sighting: the document it occurs in and how many times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self {
            document: document.into(),
            frequency,
        }
    }
}
