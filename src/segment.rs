use crate::alphabet::Alphabet;
use std::iter::once;
use tinyvec::TinyVec;

/// Number of letters kept inline before a [`Letters`] list moves to the heap
pub const DIM: usize = 16;

/// The longest letter unit, in characters (a trigraph like `"L·L"`)
pub const MAX_LETTER_LEN: usize = 3;

/// The letter units of a word, borrowed from the word.
pub type Letters<'w> = TinyVec<[&'w str; DIM]>;

/// Char boundaries of a word, including the end of the word.
type Bounds = TinyVec<[usize; 32]>;

/// Split `word` into the letter units of `alphabet`.
///
/// At each position the longest letter unit wins: a trigraph is tried first, then a digraph,
/// then a single character. There is no backtracking. A character that does not start a valid
/// letter unit is skipped, so digits, punctuation and letters from other alphabets are silently
/// dropped.
///
/// Positions are counted in characters, not bytes. The engine does not change case:
/// `word` must use the same case as the alphabet (upper case for a [`TileSet`](crate::TileSet)).
/// ## Examples
/// ```
/// use tile_lexicon::segment;
/// let alphabet = ["A", "C", "CH", "O", "R", "RR"];
/// assert_eq!(segment("CHARRO", &alphabet).as_slice(), &["CH", "A", "RR", "O"]);
/// assert_eq!(segment("CHAR-RO", &alphabet).as_slice(), &["CH", "A", "R", "R", "O"]);
/// ```
pub fn segment<'w, A: Alphabet + ?Sized>(word: &'w str, alphabet: &A) -> Letters<'w> {
    let bounds: Bounds = word
        .char_indices()
        .map(|(i, _)| i)
        .chain(once(word.len()))
        .collect();
    // number of chars in word
    let len = bounds.len() - 1;
    let mut letters = Letters::new();
    let mut i = 0;
    while i < len {
        // a window of n chars at i must fit: i + n - 1 < len
        let letter = (1..=MAX_LETTER_LEN)
            .rev()
            .filter(|&n| i + n - 1 < len)
            .map(|n| (n, &word[bounds[i]..bounds[i + n]]))
            .find(|(_, letter)| alphabet.contains(letter));
        match letter {
            Some((n, letter)) => {
                letters.push(letter);
                i += n;
            }
            None => i += 1,
        }
    }
    letters
}
