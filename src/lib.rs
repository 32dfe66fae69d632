//! # word-finder
//!
//! Finds query words in a rectangular character matrix and reports the most
//! frequent ones. Words are matched left-to-right along rows and
//! top-to-bottom along columns, counting non-overlapping occurrences.
//!
//! ```
//! use word_finder::WordFinder;
//!
//! let finder = WordFinder::new(["coldwuv", "windxhg", "snowmqv", "chillpq"]).unwrap();
//! let top = finder.find(["cold", "wind", "chill", "snow", "hail"]);
//! assert_eq!(top, ["cold", "wind", "chill", "snow"]);
//! ```
pub mod finder;
pub mod input;
pub mod report;

// Re-export the main types for convenience
pub use finder::{
    count_matches,
    FinderError,
    Result,
    WordFinder,
    DEFAULT_TOP_N,
    models::{Matrix, WordCount},
};
pub use report::write_report;
