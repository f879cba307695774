//! Traits for the inputs of the word analyzer: the valid letters of a language,
//! their point values, and the set of valid words.
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;

/// Iterator over the letters of an [`Alphabet`].
pub type LetterIter<'a> = Box<dyn Iterator<Item = &'a str> + 'a>;

/// The set of valid letter units of a language.
///
/// A letter unit is a single character, a digraph (`"CH"`, `"RR"`) or a trigraph (`"L·L"`).
/// The canonical alphabet is a [`TileSet`](crate::TileSet), but any set or map keyed by
/// letter can be used.
pub trait Alphabet {
    /// Returns `true` if `letter` is a valid letter unit.
    fn contains(&self, letter: &str) -> bool;

    /// Iterate over all letter units.
    fn letters(&self) -> LetterIter<'_>;

    /// Returns `true` if there are no letter units.
    fn is_empty(&self) -> bool {
        self.letters().next().is_none()
    }
}

/// An [`Alphabet`] with a point value for each letter.
pub trait LetterValues: Alphabet {
    /// Return the points for `letter`, or None if it is not in the alphabet.
    fn points(&self, letter: &str) -> Option<u32>;
}

/// A set of valid words.
pub trait Lexicon {
    /// Returns `true` if `word` is a valid word.
    fn contains_word(&self, word: &str) -> bool;
}

impl<S: BuildHasher> Alphabet for HashSet<String, S> {
    fn contains(&self, letter: &str) -> bool {
        HashSet::contains(self, letter)
    }

    fn letters(&self) -> LetterIter<'_> {
        Box::new(self.iter().map(String::as_str))
    }
}

impl<'s, S: BuildHasher> Alphabet for HashSet<&'s str, S> {
    fn contains(&self, letter: &str) -> bool {
        HashSet::contains(self, letter)
    }

    fn letters(&self) -> LetterIter<'_> {
        Box::new(self.iter().copied())
    }
}

impl Alphabet for BTreeSet<String> {
    fn contains(&self, letter: &str) -> bool {
        BTreeSet::contains(self, letter)
    }

    fn letters(&self) -> LetterIter<'_> {
        Box::new(self.iter().map(String::as_str))
    }
}

impl<'s> Alphabet for [&'s str] {
    fn contains(&self, letter: &str) -> bool {
        self.iter().any(|&l| l == letter)
    }

    fn letters(&self) -> LetterIter<'_> {
        Box::new(self.iter().copied())
    }
}

impl<'s, const N: usize> Alphabet for [&'s str; N] {
    fn contains(&self, letter: &str) -> bool {
        Alphabet::contains(&self[..], letter)
    }

    fn letters(&self) -> LetterIter<'_> {
        Box::new(self.iter().copied())
    }
}

impl<S: BuildHasher> Alphabet for HashMap<String, u32, S> {
    fn contains(&self, letter: &str) -> bool {
        self.contains_key(letter)
    }

    fn letters(&self) -> LetterIter<'_> {
        Box::new(self.keys().map(String::as_str))
    }
}

impl<S: BuildHasher> LetterValues for HashMap<String, u32, S> {
    fn points(&self, letter: &str) -> Option<u32> {
        self.get(letter).copied()
    }
}

impl<'s, S: BuildHasher> Alphabet for HashMap<&'s str, u32, S> {
    fn contains(&self, letter: &str) -> bool {
        self.contains_key(letter)
    }

    fn letters(&self) -> LetterIter<'_> {
        Box::new(self.keys().copied())
    }
}

impl<'s, S: BuildHasher> LetterValues for HashMap<&'s str, u32, S> {
    fn points(&self, letter: &str) -> Option<u32> {
        self.get(letter).copied()
    }
}

impl Alphabet for BTreeMap<String, u32> {
    fn contains(&self, letter: &str) -> bool {
        self.contains_key(letter)
    }

    fn letters(&self) -> LetterIter<'_> {
        Box::new(self.keys().map(String::as_str))
    }
}

impl LetterValues for BTreeMap<String, u32> {
    fn points(&self, letter: &str) -> Option<u32> {
        self.get(letter).copied()
    }
}

impl<S: BuildHasher> Lexicon for HashSet<String, S> {
    fn contains_word(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl<'s, S: BuildHasher> Lexicon for HashSet<&'s str, S> {
    fn contains_word(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Lexicon for BTreeSet<String> {
    fn contains_word(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

impl<'s> Lexicon for [&'s str] {
    fn contains_word(&self, word: &str) -> bool {
        self.iter().any(|&w| w == word)
    }
}

impl<'s, const N: usize> Lexicon for [&'s str; N] {
    fn contains_word(&self, word: &str) -> bool {
        self[..].contains_word(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_alphabets() {
        let owned: HashSet<String> = ["A", "CH"].iter().map(|s| s.to_string()).collect();
        let borrowed: HashSet<&str> = ["A", "CH"].iter().copied().collect();
        let ordered: BTreeSet<String> = owned.iter().cloned().collect();
        let alphabets: [&dyn Alphabet; 4] = [&owned, &borrowed, &ordered, &["A", "CH"]];
        for alphabet in alphabets {
            assert!(alphabet.contains("CH"));
            assert!(!alphabet.contains("C"));
            assert_eq!(alphabet.letters().count(), 2);
            assert!(!alphabet.is_empty());
        }
    }

    #[test]
    fn test_map_alphabet() {
        let values: HashMap<&str, u32> = [("A", 1), ("RR", 8)].iter().copied().collect();
        assert!(values.contains("RR"));
        assert_eq!(values.points("RR"), Some(8));
        assert_eq!(values.points("R"), None);
    }

    #[test]
    fn test_empty() {
        let empty: [&str; 0] = [];
        assert!(Alphabet::is_empty(&empty));
        assert!(!empty.contains_word("A"));
    }

    #[test]
    fn test_lexicon() {
        let words: HashSet<&str> = ["CAT", "AT"].iter().copied().collect();
        assert!(words.contains_word("CAT"));
        assert!(!words.contains_word("CA"));
        assert!(["CAT"].contains_word("CAT"));
    }
}
