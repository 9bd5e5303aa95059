use crate::error::{Error, Result};
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// A multiset of letters, stored as `(letter, count)` pairs.
///
/// Letters are lowercase, unique and strictly ascending, and every count is
/// positive. Each constructor restores this form, so two values compare equal
/// exactly when they hold the same letters, which is what makes an
/// `Occurrences` usable as a dictionary key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Occurrences(Vec<(char, usize)>);

/// Counts the letters of `word`, ignoring case and anything that is not a letter.
pub fn word_occurrences(word: &str) -> Occurrences {
    let pairs = word
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphabetic())
        .sorted()
        .dedup_with_count()
        .map(|(count, letter)| (letter, count))
        .collect_vec();
    Occurrences(pairs)
}

/// Counts the letters of a whole sentence. Word boundaries are lost.
pub fn sentence_occurrences<S: AsRef<str>>(sentence: &[S]) -> Occurrences {
    let letters: String = sentence.iter().map(AsRef::as_ref).collect();
    word_occurrences(&letters)
}

impl Occurrences {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of letters, counting repeats.
    pub fn len(&self) -> usize {
        self.0.iter().map(|&(_, count)| count).sum()
    }

    pub fn as_slice(&self) -> &[(char, usize)] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.0.iter().copied()
    }

    /// Removes the letters of `other` from `self`.
    ///
    /// `other` must be a sub-multiset of `self`. If some letter of `other` is
    /// missing or appears more often than in `self`, this returns
    /// [`Error::PreconditionViolation`] instead of a negative count.
    pub fn subtract(&self, other: &Occurrences) -> Result<Occurrences> {
        let mut counts: BTreeMap<char, usize> = self.iter().collect();
        for (letter, requested) in other.iter() {
            let available = counts.get(&letter).copied().unwrap_or(0);
            if requested > available {
                return Err(Error::PreconditionViolation {
                    letter,
                    available,
                    requested,
                });
            }
            counts.insert(letter, available - requested);
        }

        let pairs = counts.into_iter().filter(|&(_, count)| count > 0).collect();
        Ok(Occurrences(pairs))
    }

    /// Letter-wise sum of two multisets.
    pub fn merge(&self, other: &Occurrences) -> Occurrences {
        self.iter().chain(other.iter()).collect()
    }

    /// Every sub-multiset of `self`, from the empty one up to `self` itself.
    ///
    /// Each letter independently keeps anywhere from zero to all of its
    /// occurrences, so a list with counts `c1..ck` has `(c1+1)*...*(ck+1)`
    /// combinations. The order of the result is unspecified.
    pub fn combinations(&self) -> Vec<Occurrences> {
        // An empty product still has one element.
        if self.is_empty() {
            return vec![Occurrences::default()];
        }

        self.0
            .iter()
            .map(|&(letter, count)| (0..=count).map(move |taken| (letter, taken)))
            .multi_cartesian_product()
            .map(|choice| {
                // Letters stay ascending, only the zero counts need to go.
                Occurrences(choice.into_iter().filter(|&(_, taken)| taken > 0).collect())
            })
            .collect()
    }
}

/// Builds a canonical list from arbitrary pairs: letters are lowercased,
/// repeated letters summed (saturating at `usize::MAX`), non-letters and
/// zero counts dropped.
impl FromIterator<(char, usize)> for Occurrences {
    fn from_iter<I: IntoIterator<Item = (char, usize)>>(iter: I) -> Self {
        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        for (letter, count) in iter {
            for lower in letter.to_lowercase().filter(|c| c.is_alphabetic()) {
                let total = counts.entry(lower).or_insert(0);
                *total = total.saturating_add(count);
            }
        }
        Occurrences(counts.into_iter().filter(|&(_, count)| count > 0).collect())
    }
}

impl Display for Occurrences {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{{}}");
        }
        for (letter, count) in self.iter() {
            write!(f, "{}{}", letter, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn occ(pairs: &[(char, usize)]) -> Occurrences {
        pairs.iter().copied().collect()
    }

    fn is_canonical(o: &Occurrences) -> bool {
        o.as_slice().iter().all(|&(_, count)| count > 0)
            && o.as_slice().windows(2).all(|w| w[0].0 < w[1].0)
    }

    #[test]
    fn word_occurrences_folds_case() {
        assert_eq!(
            word_occurrences("Abcd").as_slice(),
            &[('a', 1), ('b', 1), ('c', 1), ('d', 1)]
        );
        assert_eq!(word_occurrences("Robert"), word_occurrences("robert"));
        assert_eq!(
            word_occurrences("Mississippi").as_slice(),
            &[('i', 4), ('m', 1), ('p', 2), ('s', 4)]
        );
    }

    #[test]
    fn word_occurrences_are_canonical() {
        for word in ["", "a", "zyxxa", "Hello, World!", "aAaA", "don't", "1234"] {
            assert!(is_canonical(&word_occurrences(word)), "{}", word);
        }
    }

    #[test]
    fn words_without_letters_are_empty() {
        assert!(word_occurrences("").is_empty());
        assert!(word_occurrences("--- 42 ---").is_empty());
        assert_eq!(word_occurrences("it's"), word_occurrences("tis"));
    }

    #[test]
    fn sentence_occurrences_ignore_word_boundaries() {
        let sentence = ["I", "love", "you"];
        assert_eq!(
            sentence_occurrences(&sentence).as_slice(),
            &[('e', 1), ('i', 1), ('l', 1), ('o', 2), ('u', 1), ('v', 1), ('y', 1)]
        );
        assert_eq!(
            sentence_occurrences(&["ab", "c"]),
            sentence_occurrences(&["c", "ba"])
        );
        assert!(sentence_occurrences::<&str>(&[]).is_empty());
    }

    #[test]
    fn from_iter_canonicalises() {
        let o = occ(&[('b', 1), ('A', 2), ('c', 0), ('b', 1), ('!', 3)]);
        assert_eq!(o.as_slice(), &[('a', 2), ('b', 2)]);
        assert_eq!(o.len(), 4);
    }

    #[test]
    fn subtract_removes_letters() {
        let x = occ(&[('a', 2), ('b', 2)]);
        let y = occ(&[('a', 1)]);
        assert_eq!(x.subtract(&y).unwrap().as_slice(), &[('a', 1), ('b', 2)]);

        let lard = word_occurrences("jimmy");
        let r = word_occurrences("my");
        assert_eq!(lard.subtract(&r).unwrap().as_slice(), &[('i', 1), ('j', 1), ('m', 1)]);
    }

    #[test]
    fn subtract_identities() {
        let o = word_occurrences("abracadabra");
        assert_eq!(o.subtract(&Occurrences::default()).unwrap(), o);
        assert!(o.subtract(&o).unwrap().is_empty());
    }

    #[test]
    fn subtract_rejects_non_subsets() {
        let x = occ(&[('a', 1), ('b', 2)]);
        match x.subtract(&occ(&[('a', 2)])) {
            Err(Error::PreconditionViolation {
                letter,
                available,
                requested,
            }) => assert_eq!((letter, available, requested), ('a', 1, 2)),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            x.subtract(&occ(&[('z', 1)])),
            Err(Error::PreconditionViolation { letter: 'z', available: 0, requested: 1 })
        ));
    }

    #[test]
    fn combinations_of_empty() {
        assert_eq!(Occurrences::default().combinations(), vec![Occurrences::default()]);
    }

    #[test]
    fn combinations_of_abba() {
        let abba = occ(&[('a', 2), ('b', 2)]);
        let expected: HashSet<Occurrences> = [
            occ(&[]),
            occ(&[('a', 1)]),
            occ(&[('a', 2)]),
            occ(&[('b', 1)]),
            occ(&[('a', 1), ('b', 1)]),
            occ(&[('a', 2), ('b', 1)]),
            occ(&[('b', 2)]),
            occ(&[('a', 1), ('b', 2)]),
            occ(&[('a', 2), ('b', 2)]),
        ]
        .into_iter()
        .collect();
        let combos = abba.combinations();
        assert_eq!(combos.len(), 9);
        assert_eq!(combos.into_iter().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn combinations_count_and_shape() {
        for text in ["a", "abc", "aabbbcd", "mississippi", "Hello World"] {
            let o = word_occurrences(text);
            let combos = o.combinations();
            let expected: usize = o.iter().map(|(_, count)| count + 1).product();
            assert_eq!(combos.len(), expected, "{}", text);

            let unique: HashSet<&Occurrences> = combos.iter().collect();
            assert_eq!(unique.len(), combos.len(), "duplicates for {}", text);
            assert_eq!(combos.iter().filter(|c| c.is_empty()).count(), 1);
            assert_eq!(combos.iter().filter(|c| **c == o).count(), 1);
            assert!(combos.iter().all(is_canonical));
        }
    }

    #[test]
    fn subtract_then_merge_round_trips() {
        let o = word_occurrences("assessment");
        for sub in o.combinations() {
            let rest = o.subtract(&sub).unwrap();
            assert!(is_canonical(&rest));
            assert_eq!(rest.merge(&sub), o);
        }
    }

    #[test]
    fn from_iter_saturates_huge_counts() {
        let o = occ(&[('a', usize::MAX), ('a', 2), ('b', 1)]);
        assert_eq!(o.as_slice(), &[('a', usize::MAX), ('b', 1)]);
    }

    #[test]
    fn display() {
        assert_eq!(word_occurrences("Banana").to_string(), "a3b1n2");
        assert_eq!(Occurrences::default().to_string(), "{}");
    }
}
