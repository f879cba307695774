use crate::analyzer::WordAnalyzer;
use crate::error::{Error, FormatError};
use crate::language::Language;
use crate::tilesets::TileSet;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// A word with its (possibly empty) definition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry {
    pub word: String,
    pub definition: String,
}

impl Entry {
    /// Split a trimmed, non-empty line on its first run of whitespace.
    fn from_line(line: &str) -> Entry {
        let (word, definition) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };
        Entry {
            word: String::from(word),
            definition: String::from(definition),
        }
    }
}

/// A named list of words for one language.
///
/// The text format of a word list is:
/// - line 1: the name of the list,
/// - line 2: the ISO 639-1 language code,
/// - line 3: blank,
/// - then one entry per line: the word, optionally followed by whitespace and a definition.
///
/// A leading byte order mark is ignored. Lines are trimmed and blank entry lines are skipped.
/// ## Examples
/// ```
/// use tile_lexicon::{Error, Language, WordList};
/// let wordlist: WordList = "TEST\nen\n\nAA First definition\nAAH".parse()?;
/// assert_eq!(wordlist.name, "TEST");
/// assert_eq!(wordlist.language, Language::EN);
/// assert_eq!(wordlist.entries[0].definition, "First definition");
/// assert_eq!(wordlist.entries[1].definition, "");
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordList {
    pub name: String,
    pub language: Language,
    pub entries: Vec<Entry>,
}

/// Parse a word list from its text format.
/// ## Errors
/// A [`FormatError`] for the first header line that is not valid. The entries are never
/// partially parsed.
pub fn parse_word_list(text: &str) -> Result<WordList, FormatError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split('\n').map(str::trim);

    let name = match lines.next() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(FormatError::MissingName),
    };

    let code = lines.next().unwrap_or("");
    let language =
        Language::from_str(code).map_err(|_| FormatError::InvalidLanguage(String::from(code)))?;

    match lines.next() {
        None => return Err(FormatError::BlankLineMissing),
        Some(line) if !line.is_empty() => {
            return Err(FormatError::ThirdLineNotBlank(String::from(line)))
        }
        Some(_) => {}
    }

    let entries = lines
        .filter(|line| !line.is_empty())
        .map(Entry::from_line)
        .collect();

    Ok(WordList {
        name: String::from(name),
        language,
        entries,
    })
}

impl FromStr for WordList {
    type Err = Error;
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(parse_word_list(text)?)
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<WordList '{}' ({}): {} entries>",
            self.name,
            self.language,
            self.entries.len()
        )
    }
}

impl WordList {
    /// Read the word list from a file in utf-8 text format.
    /// ## Errors
    /// Fails if the file can not be read, or is not a valid word list.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<WordList, Error> {
        let path = path.as_ref();
        let text = read_to_string(path).map_err(|source| Error::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        let wordlist = parse_word_list(&text)?;
        debug!(path = %path.display(), %wordlist, "read word list");
        Ok(wordlist)
    }

    /// Return the words of the list converted to upper case.
    pub fn words(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.word.to_uppercase())
            .collect()
    }

    /// Add alphagram, hooks and value to every entry, using the letters and points of `tileset`.
    ///
    /// Words are converted to upper case first. The hooks of a word are looked up in the
    /// words of this list. The order of the entries is kept.
    /// ## Errors
    /// If the tile set is for another language.
    /// ## Examples
    /// ```
    /// use tile_lexicon::{Error, Language, TileSet, WordList};
    /// let wordlist: WordList = "TEST\nen\n\nat\ncat feline\nate".parse()?;
    /// let tileset = TileSet::builtin(Language::EN).unwrap();
    /// let enriched = wordlist.enrich(&tileset)?;
    /// let at = &enriched.entries[0];
    /// assert_eq!(at.word, "AT");
    /// assert_eq!(at.front_hooks, vec!["C"]);
    /// assert_eq!(at.back_hooks, vec!["E"]);
    /// assert_eq!(at.value, 2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn enrich(&self, tileset: &TileSet) -> Result<EnrichedWordList, Error> {
        if tileset.language() != self.language {
            return Err(Error::LanguageMismatch {
                word_list: self.language.to_string(),
                tile_set: tileset.language().to_string(),
            });
        }
        let words = self.words();
        let lexicon: HashSet<&str> = words.iter().map(String::as_str).collect();
        let analyzer = WordAnalyzer::new(tileset, &lexicon);
        let enrich_one = |(entry, word): (&Entry, &String)| {
            let analysis = analyzer.analyze(word);
            let (front_hooks, back_hooks) = analysis.hooks.into_vecs();
            EnrichedEntry {
                word: word.clone(),
                definition: entry.definition.clone(),
                alphagram: analysis.alphagram,
                front_hooks,
                back_hooks,
                value: analysis.value,
                word_list: self.name.clone(),
                language: self.language,
            }
        };

        #[cfg(feature = "rayon")]
        let entries: Vec<EnrichedEntry> = self
            .entries
            .par_iter()
            .zip(words.par_iter())
            .map(enrich_one)
            .collect();
        #[cfg(not(feature = "rayon"))]
        let entries: Vec<EnrichedEntry> = self.entries.iter().zip(words.iter()).map(enrich_one).collect();

        info!(
            word_list = %self.name,
            language = %self.language,
            entries = entries.len(),
            "enriched word list"
        );
        Ok(EnrichedWordList {
            name: self.name.clone(),
            language: self.language,
            entries,
        })
    }
}

/// A word list entry with its alphagram, hooks and value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnrichedEntry {
    pub word: String,
    pub definition: String,
    pub alphagram: String,
    /// Letters that can be put in front of the word, in code point order
    pub front_hooks: Vec<String>,
    /// Letters that can be put after the word, in code point order
    pub back_hooks: Vec<String>,
    pub value: u64,
    /// Name of the word list
    pub word_list: String,
    pub language: Language,
}

/// A word list where every entry has been enriched with its alphagram, hooks and value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnrichedWordList {
    pub name: String,
    pub language: Language,
    pub entries: Vec<EnrichedEntry>,
}

impl fmt::Display for EnrichedWordList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<EnrichedWordList '{}' ({}): {} entries>",
            self.name,
            self.language,
            self.entries.len()
        )
    }
}

impl EnrichedWordList {
    /// Write the word list as json to `path`.
    /// ## Errors
    /// If the file can not be written.
    #[cfg(feature = "serde")]
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        use std::fs::File;
        use std::io::{BufWriter, Write};
        let path = path.as_ref();
        let write_error = |source| Error::WriteError {
            path: path.display().to_string(),
            source,
        };
        let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
        serde_json::to_writer(&mut writer, self).map_err(|err| write_error(err.into()))?;
        writer.flush().map_err(write_error)
    }

    /// Serialize the word list with bincode to `path`.
    /// ## Errors
    /// If the file can not be written.
    #[cfg(feature = "bincode")]
    pub fn serialize_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        use std::fs::File;
        use std::io::{BufWriter, Write};
        let path = path.as_ref();
        let write_error = |source| Error::WriteError {
            path: path.display().to_string(),
            source,
        };
        let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
        bincode::serialize_into(&mut writer, self).map_err(|err| match *err {
            bincode::ErrorKind::Io(source) => write_error(source),
            other => write_error(std::io::Error::new(std::io::ErrorKind::Other, other)),
        })?;
        writer.flush().map_err(write_error)
    }

    /// Deserialize the word list from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    #[cfg(feature = "bincode")]
    pub fn deserialize_from<P: AsRef<Path>>(path: P) -> Result<EnrichedWordList, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        let reader = BufReader::new(file);
        bincode::deserialize_from(reader)
            .map_err(|_| Error::WordListDeserializeError(path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "TEST\nen\n\nAA First definition\nAAH Second definition";

    fn entry(word: &str, definition: &str) -> Entry {
        Entry {
            word: String::from(word),
            definition: String::from(definition),
        }
    }

    #[test]
    fn test_parse() {
        let wordlist = parse_word_list(TEXT).unwrap();
        assert_eq!(
            wordlist,
            WordList {
                name: String::from("TEST"),
                language: Language::EN,
                entries: vec![
                    entry("AA", "First definition"),
                    entry("AAH", "Second definition")
                ],
            }
        );
    }

    #[test]
    fn test_missing_name() {
        let text = "\nen\n\nAA First definition\nAAH Second definition";
        assert_eq!(parse_word_list(text), Err(FormatError::MissingName));
        assert_eq!(parse_word_list(""), Err(FormatError::MissingName));
        assert_eq!(parse_word_list("   \nen\n\n"), Err(FormatError::MissingName));
    }

    #[test]
    fn test_invalid_language() {
        let text = "TEST\nenglish\n\nAA First definition\nAAH Second definition";
        assert_eq!(
            parse_word_list(text),
            Err(FormatError::InvalidLanguage(String::from("english")))
        );
        assert_eq!(
            parse_word_list("TEST"),
            Err(FormatError::InvalidLanguage(String::new()))
        );
        assert_eq!(
            parse_word_list("TEST\n\n\nAA"),
            Err(FormatError::InvalidLanguage(String::new()))
        );
    }

    #[test]
    fn test_third_line_not_blank() {
        let text = "TEST\nen\nAA First definition\nAAH Second definition";
        assert_eq!(
            parse_word_list(text),
            Err(FormatError::ThirdLineNotBlank(String::from(
                "AA First definition"
            )))
        );
        assert_eq!(parse_word_list("TEST\nen"), Err(FormatError::BlankLineMissing));
    }

    #[test]
    fn test_error_messages() {
        let err: Error = "\nen\n\n".parse::<WordList>().unwrap_err();
        assert!(err.to_string().contains("name of the word list is missing"));
        let err = "TEST\nenglish\n\n".parse::<WordList>().unwrap_err();
        assert!(err.to_string().contains("\"english\""));
        let err = "TEST\nen\nAA\n".parse::<WordList>().unwrap_err();
        assert!(err.to_string().contains("third line must be blank"));
    }

    #[test]
    fn test_trim_entries() {
        let text = "TEST\nen\n\n  AA First definition \n AAH Second definition ";
        let wordlist = parse_word_list(text).unwrap();
        assert_eq!(
            wordlist.entries,
            vec![
                entry("AA", "First definition"),
                entry("AAH", "Second definition")
            ]
        );
    }

    #[test]
    fn test_skip_blank_lines() {
        let text = "TEST\nen\n\nAA First definition\n\n   \nAAH Second definition\n";
        let wordlist = parse_word_list(text).unwrap();
        assert_eq!(wordlist.entries.len(), 2);
    }

    #[test]
    fn test_crlf() {
        let text = "TEST\r\nen\r\n\r\nAA First definition\r\nAAH\r\n";
        let wordlist = parse_word_list(text).unwrap();
        assert_eq!(
            wordlist.entries,
            vec![entry("AA", "First definition"), entry("AAH", "")]
        );
    }

    #[test]
    fn test_byte_order_mark() {
        let wordlist = parse_word_list("\u{feff}TEST\nen\n\nAA x").unwrap();
        assert_eq!(wordlist.name, "TEST");
        assert_eq!(wordlist.entries, vec![entry("AA", "x")]);
        assert_eq!(
            parse_word_list("\u{feff}\nen\n\n"),
            Err(FormatError::MissingName)
        );
    }

    #[test]
    fn test_no_entries() {
        let wordlist = parse_word_list("TEST\nen\n").unwrap();
        assert_eq!(wordlist.name, "TEST");
        assert!(wordlist.entries.is_empty());
    }

    #[test]
    fn test_no_definitions() {
        let wordlist = parse_word_list("TEST\nen\n\nAA\nAAH").unwrap();
        assert_eq!(wordlist.entries, vec![entry("AA", ""), entry("AAH", "")]);
    }

    #[test]
    fn test_split_on_first_whitespace() {
        let wordlist = parse_word_list("TEST\nen\n\nAA\t  a  rough\tlava").unwrap();
        assert_eq!(wordlist.entries, vec![entry("AA", "a  rough\tlava")]);
    }

    #[test]
    fn test_display() {
        let wordlist = parse_word_list(TEXT).unwrap();
        assert_eq!(wordlist.to_string(), "<WordList 'TEST' (en): 2 entries>");
    }

    fn tileset() -> TileSet {
        TileSet::builtin(Language::EN).unwrap()
    }

    #[test]
    fn test_enrich() -> Result<(), Error> {
        let text = "TEST\nen\n\nWORD a sample word\nWORDS\nSWORD a weapon\nDROWS\n";
        let enriched = text.parse::<WordList>()?.enrich(&tileset())?;
        assert_eq!(enriched.name, "TEST");
        assert_eq!(enriched.language, Language::EN);
        assert_eq!(enriched.entries.len(), 4);
        let word = &enriched.entries[0];
        assert_eq!(
            word,
            &EnrichedEntry {
                word: String::from("WORD"),
                definition: String::from("a sample word"),
                alphagram: String::from("DORW"),
                front_hooks: vec![String::from("S")],
                back_hooks: vec![String::from("S")],
                value: 4 + 1 + 1 + 2,
                word_list: String::from("TEST"),
                language: Language::EN,
            }
        );
        assert_eq!(enriched.entries[1].alphagram, "DORSW");
        assert_eq!(enriched.entries[3].alphagram, "DORSW");
        assert!(enriched.entries[3].front_hooks.is_empty());
        Ok(())
    }

    #[test]
    fn test_enrich_uppercase() -> Result<(), Error> {
        let enriched = "TEST\nen\n\nat\nCat\nate\n"
            .parse::<WordList>()?
            .enrich(&tileset())?;
        let words: Vec<&str> = enriched.entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["AT", "CAT", "ATE"]);
        assert_eq!(enriched.entries[0].front_hooks, vec!["C"]);
        assert_eq!(enriched.entries[0].back_hooks, vec!["E"]);
        assert_eq!(enriched.entries[1].value, 5);
        Ok(())
    }

    #[test]
    fn test_enrich_catalan() -> Result<(), Error> {
        let tileset = TileSet::builtin(Language::CA).unwrap();
        let enriched = "PROVA\nca\n\ncol·legi\ncol·legis\nany\n"
            .parse::<WordList>()?
            .enrich(&tileset)?;
        assert_eq!(enriched.entries[0].alphagram, "CEGIL·LO");
        assert_eq!(enriched.entries[0].back_hooks, vec!["S"]);
        assert_eq!(enriched.entries[2].value, 11);
        Ok(())
    }

    #[test]
    fn test_enrich_language_mismatch() {
        let wordlist = parse_word_list("TEST\nes\n\nCHARRO").unwrap();
        assert!(matches!(
            wordlist.enrich(&tileset()),
            Err(Error::LanguageMismatch { .. })
        ));
    }

    #[test]
    fn test_enrich_empty() -> Result<(), Error> {
        let enriched = parse_word_list("TEST\nen\n")?.enrich(&tileset())?;
        assert!(enriched.entries.is_empty());
        Ok(())
    }

    #[test]
    fn test_enrich_keeps_order() -> Result<(), Error> {
        let words: Vec<String> = (0..500).map(|i| format!("W{}", "A".repeat(i % 7 + 1))).collect();
        let text = format!("TEST\nen\n\n{}", words.join("\n"));
        let enriched = text.parse::<WordList>()?.enrich(&tileset())?;
        let result: Vec<&str> = enriched.entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(result, words.iter().map(String::as_str).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn test_enrich_matches_analyzer() -> Result<(), Error> {
        let tileset = TileSet::builtin(Language::ES).unwrap();
        let wordlist: WordList = "PRUEBA\nes\n\nCHARRO\nCHARROS\nPERRO\nLLAVE\nLLAVES\nNIÑO\nNIÑOS\n"
            .parse()?;
        let enriched = wordlist.enrich(&tileset)?;
        let words = wordlist.words();
        let lexicon: HashSet<&str> = words.iter().map(String::as_str).collect();
        let analyzer = WordAnalyzer::new(&tileset, &lexicon);
        for (entry, word) in enriched.entries.iter().zip(&words) {
            let analysis = analyzer.analyze(word);
            assert_eq!(entry.alphagram, analysis.alphagram);
            assert_eq!(entry.value, analysis.value);
            let (front, back) = analysis.hooks.into_vecs();
            assert_eq!(entry.front_hooks, front);
            assert_eq!(entry.back_hooks, back);
        }
        assert_eq!(enriched.entries[3].back_hooks, vec!["S"]);
        Ok(())
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TEXT.as_bytes()).unwrap();
        let wordlist = WordList::from_file(file.path())?;
        assert_eq!(wordlist.entries.len(), 2);
        assert!(matches!(
            WordList::from_file("/nonexistent/words.txt"),
            Err(Error::ReadError { .. })
        ));
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_record() -> Result<(), Error> {
        let enriched = "TEST\nen\n\nAT\nCAT\n".parse::<WordList>()?.enrich(&tileset())?;
        let json = serde_json::to_value(&enriched.entries[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "word": "AT",
                "definition": "",
                "alphagram": "AT",
                "front_hooks": ["C"],
                "back_hooks": [],
                "value": 2,
                "word_list": "TEST",
                "language": "en"
            })
        );
        let file = tempfile::NamedTempFile::new().unwrap();
        enriched.write_json(file.path())?;
        let text = std::fs::read_to_string(file.path()).unwrap();
        let back: EnrichedWordList = serde_json::from_str(&text).unwrap();
        assert_eq!(back, enriched);
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_word_list() {
        let wordlist = parse_word_list(TEXT).unwrap();
        let json = serde_json::to_string(&wordlist).unwrap();
        assert!(json.contains("\"language\":\"en\""));
        let back: WordList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wordlist);
        let french = json.replace("\"en\"", "\"fr\"");
        assert_eq!(
            serde_json::from_str::<WordList>(&french).unwrap().language,
            Language::FR
        );
        let invalid = json.replace("\"en\"", "\"english\"");
        assert!(serde_json::from_str::<WordList>(&invalid).is_err());
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_bincode() -> Result<(), Error> {
        let enriched = "TEST\nen\n\nAT\nCAT\n".parse::<WordList>()?.enrich(&tileset())?;
        let file = tempfile::NamedTempFile::new().unwrap();
        enriched.serialize_to(file.path())?;
        assert_eq!(EnrichedWordList::deserialize_from(file.path())?, enriched);
        Ok(())
    }
}
