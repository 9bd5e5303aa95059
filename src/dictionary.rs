use crate::error::Result;
use crate::occurrences::{word_occurrences, Occurrences};
use itertools::Itertools;
use log::{debug, info};
use std::collections::HashMap;
use std::io::BufRead;

/// Dictionary words grouped by their letter signature.
///
/// Built once and read-only afterwards, so a `&Dictionary` can be shared
/// freely between searches and threads.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    index: HashMap<Occurrences, Vec<String>>,
    words: usize,
}

impl Dictionary {
    /// Indexes `words`, keeping each word's original spelling.
    ///
    /// Surrounding whitespace is trimmed. Words without any letters have
    /// nothing to contribute to an anagram and are left out.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<Occurrences, Vec<String>> = HashMap::new();
        let mut count = 0;
        for word in words {
            let word = word.as_ref().trim();
            let signature = word_occurrences(word);
            if signature.is_empty() {
                if !word.is_empty() {
                    debug!("skipping {:?}: no letters", word);
                }
                continue;
            }
            index.entry(signature).or_default().push(word.to_owned());
            count += 1;
        }

        info!("indexed {} words under {} signatures", count, index.len());
        Dictionary {
            index,
            words: count,
        }
    }

    /// Reads a word list with one word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let lines: Vec<String> = reader.lines().try_collect()?;
        Ok(Self::new(lines))
    }

    /// Number of indexed words.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of distinct signatures.
    pub fn signatures(&self) -> usize {
        self.index.len()
    }

    /// All words whose letters are exactly `occurrences`.
    pub fn lookup(&self, occurrences: &Occurrences) -> &[String] {
        self.index.get(occurrences).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Dictionary words made of the same letters as `word`. The word itself
    /// does not need to be in the dictionary.
    pub fn word_anagrams(&self, word: &str) -> &[String] {
        self.lookup(&word_occurrences(word))
    }
}
