//! Data structures for the matrix and ranked results

use super::error::{FinderError, Result};

/// A rectangular character matrix with its transposed column view.
///
/// Both views are built once and never change, so vertical search can reuse
/// the same left-to-right scan as horizontal search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<String>,
    columns: Vec<String>,
}

impl Matrix {
    /// Build a matrix from its rows.
    ///
    /// Row length is measured in `char`s. Every row must match the first one.
    ///
    /// # Errors
    /// Returns [`FinderError::RaggedMatrix`] for the first row whose length
    /// differs from the first row's.
    pub fn from_rows(rows: Vec<String>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Ok(Self::default());
        };

        let width = first.chars().count();
        for (row, line) in rows.iter().enumerate().skip(1) {
            let found = line.chars().count();
            if found != width {
                return Err(FinderError::RaggedMatrix {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        let columns = transpose(&rows, width);
        Ok(Self { rows, columns })
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// Column `j` is the `j`-th character of every row, top to bottom.
fn transpose(rows: &[String], width: usize) -> Vec<String> {
    let mut columns: Vec<String> = (0..width)
        .map(|_| String::with_capacity(rows.len()))
        .collect();

    for row in rows {
        for (column, ch) in columns.iter_mut().zip(row.chars()) {
            column.push(ch);
        }
    }
    columns
}

/// A matched word and its total number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}
