//! Plain-text report of ranked words

use std::io::{self, Write};

const RULE: &str = "-----------------";

/// Write a top-words report to `out`.
///
/// An empty list produces a single `No words to report.` line.
pub fn write_report<W, S>(out: &mut W, words: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    if words.is_empty() {
        writeln!(out, "No words to report.")?;
        return Ok(());
    }

    writeln!(out, "Top Words Report:")?;
    writeln!(out, "{}", RULE)?;
    for word in words {
        writeln!(out, "{}", word.as_ref())?;
    }
    writeln!(out, "{}", RULE)?;
    writeln!(out, "End of report.")?;
    Ok(())
}
