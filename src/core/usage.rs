//! Key usage scanning.
//!
//! A key counts as used when it occurs as a literal substring anywhere in
//! at least one corpus file. Substring matching also catches keys that code
//! builds by concatenation or interpolation, at the cost of treating a key
//! as used when it merely appears inside an unrelated identifier.

use std::collections::HashSet;

use rayon::prelude::*;

/// Finds keys that no corpus file mentions.
#[derive(Debug, Clone, Default)]
pub struct UsageScanner {
    exclude_prefixes: Vec<String>,
}

impl UsageScanner {
    /// `exclude_prefixes` lists keys built at runtime (e.g. `toast_actions`);
    /// keys starting with any of them are never reported.
    pub fn new(exclude_prefixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            exclude_prefixes: exclude_prefixes
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    pub fn is_excluded(&self, key: &str) -> bool {
        self.exclude_prefixes
            .iter()
            .any(|prefix| key.starts_with(prefix.as_str()))
    }

    /// Keys that take part in the scan: exclusions removed, duplicates
    /// dropped, order kept.
    pub fn candidates<'k>(&self, keys: &'k [String]) -> Vec<&'k str> {
        let mut seen = HashSet::new();
        keys.iter()
            .map(String::as_str)
            .filter(|key| !key.is_empty() && !self.is_excluded(key))
            .filter(|key| seen.insert(*key))
            .collect()
    }

    /// Return the keys that appear in none of the corpus texts, in key order.
    ///
    /// Files are matched in parallel; the result is the same whatever the
    /// order of `corpus`.
    pub fn unused_keys<T>(&self, keys: &[String], corpus: &[T]) -> Vec<String>
    where
        T: AsRef<str> + Sync,
    {
        let candidates = self.candidates(keys);
        let used: HashSet<usize> = corpus
            .par_iter()
            .map(|text| find_mentioned(&candidates, text.as_ref()))
            .reduce(HashSet::new, |mut acc, found| {
                acc.extend(found);
                acc
            });

        candidates
            .into_iter()
            .enumerate()
            .filter(|(idx, _)| !used.contains(idx))
            .map(|(_, key)| key.to_string())
            .collect()
    }
}

/// Indices of the candidates mentioned in `text`.
fn find_mentioned(candidates: &[&str], text: &str) -> HashSet<usize> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, key)| text.contains(**key))
        .map(|(idx, _)| idx)
        .collect()
}
