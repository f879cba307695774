use crate::error::Error;
use crate::language::Language;
use crate::tilesets::TileSet;
use std::collections::BTreeMap;
use std::str::FromStr;
#[cfg(feature = "serde")]
use std::path::Path;
use tracing::debug;
#[cfg(feature = "serde")]
use tracing::{info, warn};

/// Tile sets by language.
///
/// ## Examples
/// ```
/// use tile_lexicon::{Error, Registry};
/// let registry = Registry::builtin();
/// let tileset = registry.tileset("es")?;
/// assert!(tileset.get("CH").is_some());
/// assert_eq!(registry.tileset("fr")?.points("K"), 10);
/// assert!(matches!(registry.tileset("de"), Err(Error::UnknownLanguage(_))));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tilesets: BTreeMap<Language, TileSet>,
}

impl Registry {
    /// Return an empty registry.
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Return a registry with all built-in tile sets.
    pub fn builtin() -> Registry {
        Registry::new().with_builtin()
    }

    /// Add the built-in tile sets for languages that have no tile set yet.
    pub fn with_builtin(mut self) -> Registry {
        for language in TileSet::builtin_languages() {
            if self.tilesets.contains_key(&language) {
                continue;
            }
            if let Some(tileset) = TileSet::builtin(language) {
                self.tilesets.insert(language, tileset);
            }
        }
        self
    }

    /// Add `tileset`, replacing a tile set for the same language.
    pub fn with_tileset(mut self, tileset: TileSet) -> Registry {
        self.insert(tileset);
        self
    }

    /// Add `tileset`, returning the tile set it replaces.
    pub fn insert(&mut self, tileset: TileSet) -> Option<TileSet> {
        debug!(%tileset, "register tile set");
        self.tilesets.insert(tileset.language(), tileset)
    }

    /// Return a registry with the tile sets from the `*.json` files in `dir`.
    ///
    /// Files are read in name order. When two files are for the same language the first one
    /// is kept and the other is skipped with a warning.
    /// ## Errors
    /// If the directory or a file can not be read, or a file is not a valid tile set.
    #[cfg(feature = "serde")]
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Registry, Error> {
        Registry::new().with_dir(dir)
    }

    /// Add the tile sets from the `*.json` files in `dir`, see [`Registry::from_dir`].
    ///
    /// Tile sets from `dir` replace tile sets that were in the registry before.
    /// ## Errors
    /// If the directory or a file can not be read, or a file is not a valid tile set.
    #[cfg(feature = "serde")]
    pub fn with_dir<P: AsRef<Path>>(mut self, dir: P) -> Result<Registry, Error> {
        let dir = dir.as_ref();
        let read_error = |source| Error::ReadError {
            path: dir.display().to_string(),
            source,
        };
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut loaded = BTreeMap::new();
        for path in paths {
            let tileset = TileSet::from_file(&path)?;
            let language = tileset.language();
            if loaded.contains_key(&language) {
                warn!(path = %path.display(), %language, "skipping duplicate tile set");
                continue;
            }
            info!(path = %path.display(), %tileset, "loaded tile set");
            loaded.insert(language, tileset);
        }
        self.tilesets.extend(loaded);
        Ok(self)
    }

    /// Return the tile set for `language`.
    pub fn get(&self, language: Language) -> Option<&TileSet> {
        self.tilesets.get(&language)
    }

    /// Return the tile set for the language with ISO 639-1 `code`.
    /// ## Errors
    /// - `InvalidLanguage` if `code` is not a valid code.
    /// - `UnknownLanguage` if there is no tile set for the language.
    pub fn tileset(&self, code: &str) -> Result<&TileSet, Error> {
        let language = Language::from_str(code)?;
        self.get(language)
            .ok_or_else(|| Error::UnknownLanguage(String::from(code)))
    }

    /// The languages with a tile set, in code order.
    pub fn languages(&self) -> Vec<Language> {
        self.tilesets.keys().copied().collect()
    }

    /// Number of tile sets.
    pub fn len(&self) -> usize {
        self.tilesets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tilesets.is_empty()
    }
}
