use crate::dictionary::Dictionary;
use crate::occurrences::{sentence_occurrences, Occurrences};
use log::{debug, trace};
use rayon::prelude::*;
use std::iter::FusedIterator;

/// A sequence of dictionary words, in reading order.
pub type Sentence<'d> = Vec<&'d str>;

/// Lazy depth-first enumeration of anagram sentences.
///
/// Each pending branch holds the words chosen so far and the letters still
/// to be spelled. A branch is complete once no letters remain. Cloning the
/// iterator restarts the remaining search from the same point.
#[derive(Clone, Debug)]
pub struct Anagrams<'d> {
    dictionary: &'d Dictionary,
    pending: Vec<(Sentence<'d>, Occurrences)>,
}

impl<'d> Anagrams<'d> {
    pub fn from_occurrences(dictionary: &'d Dictionary, occurrences: Occurrences) -> Self {
        Anagrams {
            dictionary,
            pending: vec![(Vec::new(), occurrences)],
        }
    }
}

impl<'d> Iterator for Anagrams<'d> {
    type Item = Sentence<'d>;

    fn next(&mut self) -> Option<Sentence<'d>> {
        while let Some((chosen, remaining)) = self.pending.pop() {
            if remaining.is_empty() {
                return Some(chosen);
            }

            let mut branches = Vec::new();
            for (words, rest) in choices(self.dictionary, &remaining) {
                for word in words {
                    let mut next = chosen.clone();
                    next.push(word.as_str());
                    branches.push((next, rest.clone()));
                }
            }
            trace!("{} leaves {} branches after {:?}", remaining, branches.len(), chosen);

            // Stack order: the first branch found is explored first.
            self.pending.extend(branches.into_iter().rev());
        }
        None
    }
}

impl FusedIterator for Anagrams<'_> {}

/// Every way to take one dictionary word out of `remaining`: the words that
/// share a signature, paired with the letters left over once it is taken.
fn choices<'d>(
    dictionary: &'d Dictionary,
    remaining: &Occurrences,
) -> Vec<(&'d [String], Occurrences)> {
    remaining
        .combinations()
        .into_iter()
        .filter(|sub| !sub.is_empty())
        .filter_map(|sub| {
            let words = dictionary.lookup(&sub);
            if words.is_empty() {
                return None;
            }
            let rest = match remaining.subtract(&sub) {
                Ok(rest) => rest,
                Err(err) => unreachable!("combination of {} is not a subset: {}", remaining, err),
            };
            Some((words, rest))
        })
        .collect()
}

fn collect_parallel<'d>(
    dictionary: &'d Dictionary,
    chosen: &[&'d str],
    remaining: &Occurrences,
) -> Vec<Sentence<'d>> {
    if remaining.is_empty() {
        return vec![chosen.to_vec()];
    }

    choices(dictionary, remaining)
        .into_par_iter()
        .flat_map(|(words, rest)| {
            words.par_iter().flat_map(move |word| {
                let mut next = chosen.to_vec();
                next.push(word.as_str());
                collect_parallel(dictionary, &next, &rest)
            })
        })
        .collect()
}

impl Dictionary {
    /// All sentences of dictionary words that use exactly the letters of
    /// `sentence`. Different orders of the same words count as different
    /// sentences. Results are produced lazily, in no particular order.
    pub fn sentence_anagrams<S: AsRef<str>>(&self, sentence: &[S]) -> Anagrams<'_> {
        let occurrences = sentence_occurrences(sentence);
        debug!("searching anagrams of {}", occurrences);
        Anagrams::from_occurrences(self, occurrences)
    }

    /// Same results as [`Dictionary::sentence_anagrams`], with independent
    /// branches evaluated on the rayon thread pool.
    pub fn par_sentence_anagrams<S: AsRef<str>>(&self, sentence: &[S]) -> Vec<Sentence<'_>> {
        let occurrences = sentence_occurrences(sentence);
        debug!("searching anagrams of {} in parallel", occurrences);
        collect_parallel(self, &[], &occurrences)
    }
}
