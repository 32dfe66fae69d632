//! Loading matrices and word lists from text

use std::fs;
use std::path::Path;
use log::info;

use crate::finder::Result;

/// 12x12 weather sample used when no matrix file is given.
pub const SAMPLE_MATRIX: [&str; 12] = [
    "snowstormblz",
    "rainycloudyy",
    "foggywinddrz",
    "hailstormsun",
    "chillyfrosty",
    "autumnwinter",
    "icydrizzlerz",
    "stormyfreeze",
    "summerskydrz",
    "blizzardcold",
    "freezingrain",
    "windynightsk",
];

/// Weather words searched in [`SAMPLE_MATRIX`] when no word file is given.
pub const SAMPLE_WORDS: [&str; 22] = [
    "snow", "storm", "rain", "cloudy", "foggy", "wind",
    "drizzle", "hail", "sunny", "chilly", "frosty", "autumn",
    "winter", "icy", "freeze", "summer", "sky", "blizzard",
    "cold", "freezing", "rainy", "night",
];

/// Split text into matrix rows, one per line.
///
/// Line endings (`\n` or `\r\n`) are stripped and trailing blank lines are
/// dropped. Other whitespace is kept as matrix content.
pub fn parse_matrix(text: &str) -> Vec<String> {
    let mut rows: Vec<String> = text.lines().map(str::to_owned).collect();
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }
    rows
}

/// Split text into whitespace-separated words.
pub fn parse_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

pub fn load_matrix(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let rows = parse_matrix(&fs::read_to_string(path)?);
    info!("Loaded {} matrix rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let words = parse_words(&fs::read_to_string(path)?);
    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
