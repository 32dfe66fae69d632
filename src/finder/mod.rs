//! Core matrix word finder module

pub mod models;
pub mod error;
mod count;
mod rank;

use std::collections::HashSet;
use log::{debug, trace};
use models::*;
pub use count::count_matches;
pub use rank::TopN;
pub use error::{FinderError, Result};

/// Result bound used by [`WordFinder::find`].
pub const DEFAULT_TOP_N: usize = 10;

/// Finds query words in a fixed character matrix.
///
/// Words are matched left-to-right along rows and top-to-bottom along
/// columns. The matrix is read-only after construction, so a finder can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct WordFinder {
    matrix: Matrix,
}

impl WordFinder {
    /// Build a finder over the given rows.
    ///
    /// The column view is built here, once, in O(rows x columns).
    /// An empty set of rows is valid and never matches anything.
    ///
    /// # Errors
    /// Returns [`FinderError::RaggedMatrix`] if the rows differ in length.
    pub fn new<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let matrix = Matrix::from_rows(rows.into_iter().map(Into::into).collect())?;
        debug!(
            "Matrix built: {} rows x {} columns",
            matrix.rows().len(),
            matrix.columns().len()
        );
        Ok(Self { matrix })
    }

    /// Returns the `DEFAULT_TOP_N` most frequent words from `words`.
    pub fn find<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.find_top(words, DEFAULT_TOP_N)
    }

    /// Returns up to `top_n` words from `words` that occur in the matrix,
    /// most frequent first.
    ///
    /// Duplicates in `words` are ignored. Words with equal counts keep the
    /// order in which they first appear in `words`.
    pub fn find_top<I, S>(&self, words: I, top_n: usize) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.find_with_counts(words, top_n)
            .into_iter()
            .map(|entry| entry.word)
            .collect()
    }

    /// Same ranking as [`find_top`](Self::find_top), with each word's total
    /// occurrence count attached.
    pub fn find_with_counts<I, S>(&self, words: I, top_n: usize) -> Vec<WordCount>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if top_n == 0 || self.is_empty() {
            debug!("Nothing to search: top_n={}, empty matrix={}", top_n, self.is_empty());
            return Vec::new();
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut ranking = TopN::new(top_n);
        let mut matched = 0usize;

        for item in words {
            let word = item.as_ref();
            if seen.contains(word) {
                continue;
            }
            seen.insert(word.to_owned());

            let count = self.count(word);
            trace!("'{}' occurs {} times", word, count);
            if count > 0 {
                matched += 1;
                ranking.push(WordCount::new(word, count));
            }
        }

        debug!(
            "Searched {} distinct words: {} matched, returning {}",
            seen.len(),
            matched,
            ranking.len()
        );
        ranking.into_vec()
    }

    /// Total non-overlapping occurrences of `word` across rows and columns.
    pub fn count(&self, word: &str) -> usize {
        count_matches(word, self.matrix.rows()) + count_matches(word, self.matrix.columns())
    }

    pub fn rows(&self) -> &[String] {
        self.matrix.rows()
    }

    /// The transposed view: one string per column, read top to bottom.
    pub fn columns(&self) -> &[String] {
        self.matrix.columns()
    }

    pub fn num_rows(&self) -> usize {
        self.matrix.rows().len()
    }

    pub fn num_columns(&self) -> usize {
        self.matrix.columns().len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.rows().is_empty()
    }
}
