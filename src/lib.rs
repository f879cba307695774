//! A word analysis library for tile based word games.
//! <br>
//! This crate computes the data a word game study tool needs for every word in a word list:
//! the alphagram, the front and back hooks and the value of the word in points.
//! Letters are not always single characters: spanish has `CH`, `LL` and `RR` tiles, catalan has
//! `L·L`, `NY` and `QU`. Words are split into the letter units of a language before anything else
//! is computed, so `CHARRO` is 4 tiles and not 6.
//! It can use the `rayon` crate to enrich a word list in parallel.
//!
//! # How to use `tile_lexicon`
//! Get a [`TileSet`] for the language, either a built-in one or from a json file, and parse a
//! word list in its text format: a name, an ISO 639-1 language code, a blank line and one word
//! per line with an optional definition. Then enrich the word list with the tile set.
//!
//! # Basic usage
//!  ```
//! use tile_lexicon::{Registry, WordList};
//!
//! let registry = Registry::builtin();
//! let wordlist: WordList = "SAMPLE\nes\n\nCHARRO vulgar\nCHARROS\nNIÑO child".parse()?;
//! let tileset = registry.tileset(wordlist.language.code())?;
//! let enriched = wordlist.enrich(tileset)?;
//! let charro = &enriched.entries[0];
//! assert_eq!(charro.alphagram, "ACHORR");
//! assert_eq!(charro.back_hooks, vec!["S"]);
//! assert_eq!(charro.value, 5 + 1 + 8 + 1);
//! for entry in &enriched.entries {
//!     println!("{} {} {:?} {:?} {}", entry.word, entry.alphagram, entry.front_hooks, entry.back_hooks, entry.value);
//! }
//! # Ok::<(), tile_lexicon::Error>(())
//! ```
//!
//! The building blocks work with any [`Alphabet`], [`LetterValues`] or [`Lexicon`]:
//!  ```
//! use tile_lexicon::{alphagram, find_hooks, segment};
//!
//! let alphabet = ["A", "C", "CH", "H", "O", "R", "RR"];
//! assert_eq!(segment("CHARRO", &alphabet).as_slice(), &["CH", "A", "RR", "O"]);
//! assert_eq!(alphagram("CHARRO", &alphabet), "ACHORR");
//! let hooks = find_hooks("ARRO", &["CHARRO"], &alphabet);
//! assert!(hooks.front.contains("CH"));
//! ```
mod alphabet;
mod analyzer;
mod error;
mod language;
mod registry;
mod segment;
mod tilesets;
mod wordlist;

pub use alphabet::{Alphabet, LetterIter, LetterValues, Lexicon};
pub use analyzer::{alphagram, find_hooks, word_value, Analysis, Hooks, WordAnalyzer};
pub use error::{Error, FormatError};
pub use language::Language;
pub use registry::Registry;
pub use segment::{segment, Letters, MAX_LETTER_LEN};
pub use tilesets::{Tile, TileSet};
pub use wordlist::{parse_word_list, EnrichedEntry, EnrichedWordList, Entry, WordList};
