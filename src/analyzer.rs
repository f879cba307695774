//! Alphagrams, hooks and word values, computed from the letter units of a word.
use crate::alphabet::{Alphabet, LetterValues, Lexicon};
use crate::segment::segment;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Return the alphagram of `word`: its letter units in sorted order.
///
/// Letter units are compared by code point, and concatenated without separator.
/// Two words have the same alphagram exactly when they consist of the same letter units.
/// ## Examples
/// ```
/// use tile_lexicon::alphagram;
/// let alphabet = ["A", "C", "CH", "O", "R", "RR"];
/// assert_eq!(alphagram("CHARRO", &alphabet), "ACHORR");
/// ```
pub fn alphagram<A: Alphabet + ?Sized>(word: &str, alphabet: &A) -> String {
    let mut letters = segment(word, alphabet);
    letters.sort_unstable();
    letters.concat()
}

/// Return the sum of the points of the letter units in `word`.
///
/// `values` is also the alphabet, so `word` is split exactly like [`alphagram`] splits it.
/// Characters that are not a letter unit count 0. The sum is a `u64`, so it can not overflow
/// for any word a `Letters` list can hold.
/// ## Examples
/// ```
/// use std::collections::HashMap;
/// use tile_lexicon::word_value;
/// let values: HashMap<&str, u32> = [("A", 1), ("B", 2), ("AB", 11)].iter().copied().collect();
/// assert_eq!(word_value("AB", &values), 11);
/// assert_eq!(word_value("BA", &values), 3);
/// ```
pub fn word_value<V: LetterValues + ?Sized>(word: &str, values: &V) -> u64 {
    segment(word, values)
        .iter()
        .filter_map(|letter| values.points(letter))
        .map(u64::from)
        .sum()
}

/// Letter units that make a new word when put before or after a word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hooks {
    /// Letters that can be put in front of the word
    pub front: BTreeSet<String>,
    /// Letters that can be put after the word
    pub back: BTreeSet<String>,
}

impl Hooks {
    /// Returns `true` if there are no front and no back hooks.
    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    /// Return (front, back) hooks as vectors, in code point order.
    pub fn into_vecs(self) -> (Vec<String>, Vec<String>) {
        (
            self.front.into_iter().collect(),
            self.back.into_iter().collect(),
        )
    }
}

/// Find the front and back hooks of `word`.
///
/// Every letter unit of `alphabet` is put in front of and after `word`; if the result is in
/// `lexicon` the letter is a front or back hook. Words are joined as strings, a digraph is
/// tried as one letter and never as two.
/// ## Examples
/// ```
/// use tile_lexicon::find_hooks;
/// let hooks = find_hooks("AT", &["CAT", "ATE"], &["A", "C", "E", "T"]);
/// assert!(hooks.front.contains("C"));
/// assert!(hooks.back.contains("E"));
/// ```
pub fn find_hooks<L, A>(word: &str, lexicon: &L, alphabet: &A) -> Hooks
where
    L: Lexicon + ?Sized,
    A: Alphabet + ?Sized,
{
    let mut hooks = Hooks::default();
    if word.is_empty() {
        return hooks;
    }
    let mut candidate = String::with_capacity(word.len() + 8);
    for letter in alphabet.letters() {
        candidate.clear();
        candidate.push_str(letter);
        candidate.push_str(word);
        if lexicon.contains_word(&candidate) {
            hooks.front.insert(String::from(letter));
        }
        candidate.clear();
        candidate.push_str(word);
        candidate.push_str(letter);
        if lexicon.contains_word(&candidate) {
            hooks.back.insert(String::from(letter));
        }
    }
    hooks
}

/// Everything the analyzer derives from one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub alphagram: String,
    pub hooks: Hooks,
    pub value: u64,
}

/// Analyze words against the letters and values of one language and a lexicon.
///
/// The analyzer only borrows its inputs and holds no state, so it can be shared between threads.
/// ## Examples
/// ```
/// use std::collections::HashSet;
/// use tile_lexicon::{Language, TileSet, WordAnalyzer};
/// let tileset = TileSet::builtin(Language::EN).unwrap();
/// let lexicon: HashSet<&str> = ["AT", "CAT", "ATE"].iter().copied().collect();
/// let analyzer = WordAnalyzer::new(&tileset, &lexicon);
/// let analysis = analyzer.analyze("AT");
/// assert_eq!(analysis.alphagram, "AT");
/// assert_eq!(analysis.value, 2);
/// assert!(analysis.hooks.front.contains("C"));
/// ```
#[derive(Debug)]
pub struct WordAnalyzer<'a, V: ?Sized, L: ?Sized> {
    values: &'a V,
    lexicon: &'a L,
}

impl<'a, V, L> WordAnalyzer<'a, V, L>
where
    V: LetterValues + ?Sized,
    L: Lexicon + ?Sized,
{
    /// Return a new analyzer for letter `values` and `lexicon`.
    pub fn new(values: &'a V, lexicon: &'a L) -> Self {
        WordAnalyzer { values, lexicon }
    }

    /// Return the alphagram, hooks and value of `word`.
    pub fn analyze(&self, word: &str) -> Analysis {
        Analysis {
            alphagram: alphagram(word, self.values),
            hooks: find_hooks(word, self.lexicon, self.values),
            value: word_value(word, self.values),
        }
    }
}
