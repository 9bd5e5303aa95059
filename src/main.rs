use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use log::info;
use sentence_anagrams::{Dictionary, Sentence};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

/// Print every sentence of dictionary words that uses exactly the letters of SENTENCE.
#[derive(Parser)]
#[command(version, about)]
struct Options {
    /// Word list, one word per line.
    #[arg(short, long, default_value = "words_alpha.txt")]
    dictionary: PathBuf,

    /// Search branches on all cores.
    #[arg(short, long)]
    parallel: bool,

    /// Sort the sentences before printing.
    #[arg(short, long)]
    sorted: bool,

    /// Stop after this many sentences.
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    #[arg(value_name = "SENTENCE", required = true)]
    sentence: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let options = Options::parse();

    let path = &options.dictionary;
    let wordfile = BufReader::new(
        File::open(path).with_context(|| format!("cannot open word list {}", path.display()))?,
    );
    let dictionary = Dictionary::from_reader(wordfile)
        .with_context(|| format!("cannot load word list {}", path.display()))?;

    let solutions: Box<dyn Iterator<Item = Sentence> + '_> = if options.parallel {
        Box::new(dictionary.par_sentence_anagrams(&options.sentence).into_iter())
    } else {
        Box::new(dictionary.sentence_anagrams(&options.sentence))
    };
    let solutions: Box<dyn Iterator<Item = Sentence> + '_> = if options.sorted {
        Box::new(solutions.sorted())
    } else {
        solutions
    };

    let mut out = BufWriter::new(io::stdout().lock());
    let mut printed = 0;
    for sol in solutions.take(options.limit.unwrap_or(usize::MAX)) {
        writeln!(out, "{}", sol.iter().join(" "))?;
        printed += 1;
    }
    out.flush()?;

    info!("printed {} sentences", printed);
    Ok(())
}
