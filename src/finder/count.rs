//! Occurrence counting over lines of text

/// Count occurrences of `word` across all `lines`.
///
/// Matches are non-overlapping: after a hit the scan resumes at the end of
/// the match, so `"aa"` occurs twice in `"aaaa"`, not three times.
/// Comparison is exact and byte-wise. An empty word never matches.
pub fn count_matches<S: AsRef<str>>(word: &str, lines: &[S]) -> usize {
    if word.is_empty() {
        return 0;
    }

    lines
        .iter()
        .map(|line| line.as_ref().matches(word).count())
        .sum()
}
