use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use word_finder::input::{self, SAMPLE_MATRIX, SAMPLE_WORDS};
use word_finder::{write_report, FinderError, WordFinder, DEFAULT_TOP_N};

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(
    name = "word-finder",
    about = "Reports the most frequent words found in a character matrix"
)]
struct Args {
    /// Matrix file, one row per line. Defaults to a built-in 12x12 sample.
    #[clap(short = 'm', long)]
    matrix: Option<PathBuf>,

    /// Word list file, whitespace separated. Defaults to the sample's word list.
    #[clap(short = 'w', long)]
    words: Option<PathBuf>,

    /// Maximum number of words to report.
    #[clap(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Prints each word with its occurrence count instead of the report.
    #[clap(short = 'c', long)]
    counts: bool,
}

fn run(args: &Args) -> Result<(), FinderError> {
    let rows = match &args.matrix {
        Some(path) => input::load_matrix(path)?,
        None => SAMPLE_MATRIX.iter().map(|row| row.to_string()).collect(),
    };
    let words = match &args.words {
        Some(path) => input::load_words(path)?,
        None => SAMPLE_WORDS.iter().map(|word| word.to_string()).collect(),
    };

    let finder = WordFinder::new(rows)?;

    let out = io::stdout();
    let mut out = BufWriter::new(out.lock());
    if args.counts {
        for entry in finder.find_with_counts(&words, args.top) {
            writeln!(out, "{}\t{}", entry.word, entry.count)?;
        }
    } else {
        let top = finder.find_top(&words, args.top);
        write_report(&mut out, &top[..])?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
