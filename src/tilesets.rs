use crate::alphabet::{Alphabet, LetterIter, LetterValues};
use crate::error::Error;
use crate::language::Language;
use crate::segment::MAX_LETTER_LEN;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
#[cfg(feature = "serde")]
use std::path::Path;

mod ca;
mod en;
mod es;
mod fr;

/// label, count, points
type TileInfo = (&'static str, u32, u32);

/// Languages with a built-in tile distribution.
const BUILTIN: &[(Language, &[TileInfo])] = &[
    (Language::CA, ca::TILESET),
    (Language::EN, en::TILESET),
    (Language::ES, es::TILESET),
    (Language::FR, fr::TILESET),
];

/// Points and number of tiles for one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tile {
    /// Value of the letter
    pub points: u32,
    /// Number of tiles with this letter in the game
    pub count: u32,
}

/// The tile distribution of a language: the valid letters, with the points and number of tiles
/// for each letter.
///
/// A letter can be a single character or a digraph or trigraph like `"CH"`, `"RR"` or `"L·L"`.
/// Letters are stored in upper case. A `TileSet` is the [`Alphabet`] and [`LetterValues`] of
/// its language.
///
/// Blank tiles are not part of a tile set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "TileSetRecord", into = "TileSetRecord")
)]
pub struct TileSet {
    language: Language,
    tiles: BTreeMap<String, Tile>,
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<TileSet '{}': {} letters, {} tiles>",
            self.language,
            self.len(),
            self.total_tiles()
        )
    }
}

impl TileSet {
    /// Return a new `TileSet` for `language`.
    ///
    /// Letters are trimmed and converted to upper case.
    /// ## Errors
    /// If a letter is empty, longer than 3 characters or occurs more than once.
    /// ## Examples
    /// ```
    /// use tile_lexicon::{Error, Language, Tile, TileSet};
    /// let tileset = TileSet::new(
    ///     Language::ES,
    ///     vec![("a", Tile { points: 1, count: 12 }), ("ch", Tile { points: 5, count: 1 })],
    /// )?;
    /// assert_eq!(tileset.points("CH"), 5);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new<I, S>(language: Language, tiles: I) -> Result<TileSet, Error>
    where
        I: IntoIterator<Item = (S, Tile)>,
        S: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for (letter, tile) in tiles {
            let letter = letter.as_ref().trim().to_uppercase();
            if letter.is_empty() {
                return Err(Error::EmptyLetter);
            }
            if letter.chars().count() > MAX_LETTER_LEN {
                return Err(Error::LetterTooLong(letter));
            }
            match map.entry(letter) {
                btree_map::Entry::Occupied(entry) => {
                    return Err(Error::DuplicateLetter(entry.key().clone()))
                }
                btree_map::Entry::Vacant(entry) => {
                    entry.insert(tile);
                }
            }
        }
        Ok(TileSet {
            language,
            tiles: map,
        })
    }

    /// Return the built-in `TileSet` for `language`, or None if there is none.
    ///
    /// Built-in tile sets: `ca` (catalan), `en` (english), `es` (spanish), `fr` (french).
    pub fn builtin(language: Language) -> Option<TileSet> {
        BUILTIN
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|&(language, table)| TileSet {
                language,
                tiles: table
                    .iter()
                    .map(|&(label, count, points)| (String::from(label), Tile { points, count }))
                    .collect(),
            })
    }

    /// Languages with a built-in tile set.
    pub fn builtin_languages() -> impl Iterator<Item = Language> {
        BUILTIN.iter().map(|&(language, _)| language)
    }

    /// Read a `TileSet` from a json file.
    ///
    /// The file holds `{"language": "en", "tiles": [{"letter": "A", "points": 1, "count": 9}, ...]}`,
    /// or `"tiles"` as a map from letter to `{"points": 1, "count": 9}`.
    /// ## Errors
    /// If the file can not be read or is not a valid tile set.
    #[cfg(feature = "serde")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<TileSet, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::TileSetDeserializeError {
            path: path.display().to_string(),
            source,
        })
    }

    /// The language of this tile set
    pub fn language(&self) -> Language {
        self.language
    }

    /// Return the tile for `letter` if present.
    pub fn get(&self, letter: &str) -> Option<&Tile> {
        self.tiles.get(letter)
    }

    /// Return the points for `letter`, or 0 if not found
    pub fn points(&self, letter: &str) -> u32 {
        self.get(letter).map_or(0, |tile| tile.points)
    }

    /// Return the number of tiles with `letter` in the tile set, or 0 if not found
    pub fn count(&self, letter: &str) -> u32 {
        self.get(letter).map_or(0, |tile| tile.count)
    }

    /// Iterate over (letter, tile) in code point order of the letters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tile)> {
        self.tiles.iter().map(|(letter, tile)| (letter.as_str(), tile))
    }

    /// The number of distinct letters
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns `true` if the tile set has no letters.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The total number of tiles
    pub fn total_tiles(&self) -> u64 {
        self.tiles.values().map(|tile| u64::from(tile.count)).sum()
    }
}

impl Alphabet for TileSet {
    fn contains(&self, letter: &str) -> bool {
        self.tiles.contains_key(letter)
    }

    fn letters(&self) -> LetterIter<'_> {
        Box::new(self.tiles.keys().map(String::as_str))
    }
}

impl LetterValues for TileSet {
    fn points(&self, letter: &str) -> Option<u32> {
        self.get(letter).map(|tile| tile.points)
    }
}

/// A tile as stored in a tile set file.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TileRecord {
    letter: String,
    points: u32,
    count: u32,
}

#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum TileRecords {
    List(Vec<TileRecord>),
    Map(BTreeMap<String, Tile>),
}

/// A tile set as stored in a tile set file.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TileSetRecord {
    language: Language,
    tiles: TileRecords,
}

#[cfg(feature = "serde")]
impl TryFrom<TileSetRecord> for TileSet {
    type Error = Error;
    fn try_from(record: TileSetRecord) -> Result<Self, Self::Error> {
        match record.tiles {
            TileRecords::List(tiles) => TileSet::new(
                record.language,
                tiles.into_iter().map(|tile| {
                    let TileRecord {
                        letter,
                        points,
                        count,
                    } = tile;
                    (letter, Tile { points, count })
                }),
            ),
            TileRecords::Map(tiles) => TileSet::new(record.language, tiles),
        }
    }
}

#[cfg(feature = "serde")]
impl From<TileSet> for TileSetRecord {
    fn from(tileset: TileSet) -> Self {
        let tiles = tileset
            .tiles
            .into_iter()
            .map(|(letter, tile)| TileRecord {
                letter,
                points: tile.points,
                count: tile.count,
            })
            .collect();
        TileSetRecord {
            language: tileset.language,
            tiles: TileRecords::List(tiles),
        }
    }
}
