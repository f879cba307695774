use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Violations of the word list text header.
///
/// The header is three lines: the name of the list, an ISO 639-1 language code
/// and a blank line.
pub enum FormatError {
    /// First line is empty
    #[error("Invalid file format: the name of the word list is missing")]
    MissingName,

    /// Second line is not an ISO 639-1 code
    #[error("Invalid language code: \"{0}\", it must be a valid ISO 639-1 code")]
    InvalidLanguage(String),

    /// The text ends before the third line
    #[error("Invalid file format: the blank third line is missing")]
    BlankLineMissing,

    /// Third line has content
    #[error("Invalid file format: the third line must be blank, found \"{0}\"")]
    ThirdLineNotBlank(String),
}

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading a word list or tile set file
    #[error("File \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error writing an output file
    #[error("File \"{path}\" could not be written")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    /// The word list text is malformed
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Not a two letter ISO 639-1 code
    #[error("Invalid language code \"{0}\"")]
    InvalidLanguage(String),

    /// No tile set is registered for the language
    #[error("No tile set for language \"{0}\"")]
    UnknownLanguage(String),

    /// A tile set contains an empty letter
    #[error("Tile set contains an empty letter")]
    EmptyLetter,

    /// A letter is longer than a trigraph
    #[error("Tile set letter \"{0}\" is longer than 3 characters")]
    LetterTooLong(String),

    /// A letter occurs twice in a tile set
    #[error("Tile set letter \"{0}\" is defined more than once")]
    DuplicateLetter(String),

    /// Word list and tile set are for different languages
    #[error("Word list language \"{word_list}\" does not match tile set language \"{tile_set}\"")]
    LanguageMismatch { word_list: String, tile_set: String },

    /// Error deserializing a tile set file
    #[cfg(feature = "serde")]
    #[error("Tile set \"{path}\" could not be deserialized")]
    TileSetDeserializeError {
        path: String,
        source: serde_json::Error,
    },

    /// Error deserializing a bincoded word list
    #[cfg(feature = "bincode")]
    #[error("Word list {0} could not be deserialized")]
    WordListDeserializeError(String),
}
