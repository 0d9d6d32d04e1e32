use crate::index::SearchIndex;
use crate::Occurrence;
use std::collections::HashSet;

/// Maximum number of documents a query returns.
const RESULT_CAP: usize = 5;

impl SearchIndex {
    /// Documents matching `kw1` or `kw2`, best five first.
    ///
    /// Results are ranked by descending frequency across both occurrence
    /// lists; a frequency tie goes to `kw1`'s entry, with `kw2`'s entry
    /// still considered on the next step. A document containing both
    /// keywords appears once. Unknown keywords simply contribute nothing;
    /// when neither keyword is indexed the result is empty.
    pub fn top5(&self, kw1: &str, kw2: &str) -> Vec<String> {
        match (self.occurrences(kw1), self.occurrences(kw2)) {
            (None, None) => Vec::new(),
            (Some(list), None) | (None, Some(list)) => list
                .iter()
                .take(RESULT_CAP)
                .map(|occ| occ.document.clone())
                .collect(),
            (Some(l1), Some(l2)) => merge_ranked(l1, l2),
        }
    }
}

/// Two-pointer merge of two frequency-sorted occurrence lists.
///
/// Like the merge step of a merge sort, except that a document present in
/// both lists is emitted only once and the output is capped. When one list
/// runs out the other is drained without further comparison.
fn merge_ranked(l1: &[Occurrence], l2: &[Occurrence]) -> Vec<String> {
    let mut out = Vec::with_capacity(RESULT_CAP);
    let mut seen: HashSet<&str> = HashSet::new();
    let (mut i, mut j) = (0usize, 0usize);
    while out.len() < RESULT_CAP {
        match (l1.get(i), l2.get(j)) {
            (None, None) => break,
            (Some(a), None) => {
                emit(&mut out, &mut seen, a);
                i += 1;
            }
            (None, Some(b)) => {
                emit(&mut out, &mut seen, b);
                j += 1;
            }
            (Some(a), Some(b)) if a.frequency == b.frequency && a.document == b.document => {
                // One document matched under both keywords: a single hit.
                emit(&mut out, &mut seen, a);
                i += 1;
                j += 1;
            }
            (Some(a), Some(b)) => {
                if b.frequency > a.frequency {
                    emit(&mut out, &mut seen, b);
                    j += 1;
                } else {
                    // Higher frequency, or a tie: kw1 goes first and kw2's
                    // entry stays pending for the next step.
                    emit(&mut out, &mut seen, a);
                    i += 1;
                }
            }
        }
    }
    out
}

fn emit<'a>(out: &mut Vec<String>, seen: &mut HashSet<&'a str>, occ: &'a Occurrence) {
    if seen.insert(occ.document.as_str()) {
        out.push(occ.document.clone());
    }
}
