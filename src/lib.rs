//! Anagram sentences over a fixed word list.
//!
//! Words and sentences are reduced to [`Occurrences`], a sorted multiset of
//! letters. A [`Dictionary`] groups its words by that signature, and the
//! search repeatedly peels a dictionary word off the remaining letters until
//! none are left.

pub mod dictionary;
pub mod error;
pub mod occurrences;
pub mod search;

pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use occurrences::{sentence_occurrences, word_occurrences, Occurrences};
pub use search::{Anagrams, Sentence};
