use crate::keyword;
use crate::Occurrence;
use anyhow::Result;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Inverted index over a fixed corpus.
///
/// The index is an owned value, never ambient state: build one per corpus,
/// or several side by side in the same process. Building is a strictly
/// sequential fold, one document at a time; afterwards the index is frozen
/// and queries are plain `&self` reads.
#[derive(Debug, Default)]
pub struct SearchIndex {
    /// keyword -> occurrences, non-increasing by frequency after every
    /// completed merge step.
    postings: HashMap<String, Vec<Occurrence>>,
    noise_words: HashSet<String>,
}

impl SearchIndex {
    pub fn new(noise_words: HashSet<String>) -> Self {
        Self {
            postings: HashMap::new(),
            noise_words,
        }
    }

    /// Index a whole corpus.
    ///
    /// `tokens_for` is invoked once per document id and must yield that
    /// document's raw whitespace-delimited tokens in reading order. Any
    /// error it reports aborts the whole build; a partially read source
    /// never leaks into the index.
    pub fn build<I, F, T>(doc_ids: I, mut tokens_for: F, noise_words: HashSet<String>) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        F: FnMut(&str) -> Result<T>,
        T: IntoIterator<Item = String>,
    {
        let mut index = Self::new(noise_words);
        let mut docs = 0usize;
        for doc_id in doc_ids {
            let counts = index.index_document(tokens_for(&doc_id)?);
            tracing::debug!(doc = %doc_id, keywords = counts.len(), "indexed document");
            index.merge_document(&doc_id, counts);
            docs += 1;
        }
        tracing::info!(docs, keywords = index.postings.len(), "index build complete");
        Ok(index)
    }

    /// Count keyword frequencies for a single document. Tokens the
    /// normalizer rejects are skipped; they are not errors.
    pub fn index_document<T>(&self, tokens: T) -> HashMap<String, u32>
    where
        T: IntoIterator<Item = String>,
    {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in tokens {
            if let Some(kw) = keyword::normalize(&token, &self.noise_words) {
                *counts.entry(kw).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Fold one document's keyword counts into the index.
    ///
    /// Each touched keyword's occurrence list grows by exactly one entry,
    /// appended and then moved into rank position. Called at most once per
    /// document, so a list never holds two entries for the same document.
    pub fn merge_document(&mut self, doc_id: &str, counts: HashMap<String, u32>) {
        for (kw, frequency) in counts {
            let occs = self.postings.entry(kw).or_default();
            occs.push(Occurrence::new(doc_id, frequency));
            insert_last(occs);
        }
    }

    /// Occurrence list for a keyword, if any document contains it.
    pub fn occurrences(&self, kw: &str) -> Option<&[Occurrence]> {
        self.postings.get(kw).map(Vec::as_slice)
    }

    /// Number of distinct keywords indexed.
    pub fn keyword_count(&self) -> usize {
        self.postings.len()
    }
}

/// Restore descending-frequency order after one occurrence has been
/// appended at the end of `occs`.
///
/// Everything before the last element is already sorted; the last element
/// is removed and binary-searched back into place. Returns the sequence of
/// midpoints the search probed, which exists only so tests can verify the
/// search path. A list of size one needs no search and probes nothing.
///
/// When several entries share the new element's frequency, the landing
/// spot is whichever equal midpoint the search probes first: reproducible
/// for the same input, but with no stable tie order beyond that.
pub fn insert_last(occs: &mut Vec<Occurrence>) -> Vec<usize> {
    let mut probes = Vec::new();
    if occs.len() < 2 {
        return probes;
    }
    let Some(target) = occs.pop() else {
        return probes;
    };
    let mut lo: isize = 0;
    let mut hi: isize = occs.len() as isize - 1;
    let mut idx = 0usize;
    while lo <= hi {
        let mid = ((lo + hi) / 2) as usize;
        probes.push(mid);
        match occs[mid].frequency.cmp(&target.frequency) {
            Ordering::Equal => {
                idx = mid;
                break;
            }
            // target outranks the probe: it belongs strictly before mid
            Ordering::Less => {
                idx = mid;
                hi = mid as isize - 1;
            }
            // probe outranks the target: it belongs strictly after mid
            Ordering::Greater => {
                idx = mid + 1;
                lo = mid as isize + 1;
            }
        }
    }
    occs.insert(idx, target);
    probes
}
