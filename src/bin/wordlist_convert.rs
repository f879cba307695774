//! Convert a word list in text format to enriched json or bincode.
//!
//! The tile set is a json file given with `--tile-set`, or looked up by the language of the
//! word list in `--tile-dir` and the built-in tile sets.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tile_lexicon::{Registry, TileSet, WordList};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    /// Needs the `bincode` feature
    Bincode,
}

/// Add alphagrams, hooks and word values to a word list
#[derive(Parser, Debug)]
#[command(name = "wordlist-convert")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Word list in text format: name, language code, blank line, one word per line
    input: PathBuf,

    /// Output file
    output: PathBuf,

    /// Tile set json file, overrides the tile set for the language of the word list
    #[arg(short, long)]
    tile_set: Option<PathBuf>,

    /// Directory with extra tile set json files
    #[arg(long, env = "TILE_LEXICON_TILE_DIR")]
    tile_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

impl Format {
    /// Fail early when the output format is not compiled in.
    fn check_available(self) -> Result<()> {
        match self {
            Format::Json => Ok(()),
            #[cfg(feature = "bincode")]
            Format::Bincode => Ok(()),
            #[cfg(not(feature = "bincode"))]
            Format::Bincode => anyhow::bail!("bincode output needs the `bincode` feature"),
        }
    }
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    args.format.check_available()?;

    let wordlist = WordList::from_file(&args.input)
        .with_context(|| format!("reading word list {}", args.input.display()))?;
    info!(%wordlist, "read word list");

    let tileset = match &args.tile_set {
        Some(path) => TileSet::from_file(path)
            .with_context(|| format!("reading tile set {}", path.display()))?,
        None => {
            let registry = match &args.tile_dir {
                Some(dir) => Registry::builtin()
                    .with_dir(dir)
                    .with_context(|| format!("reading tile sets from {}", dir.display()))?,
                None => Registry::builtin(),
            };
            registry.tileset(wordlist.language.code())?.clone()
        }
    };
    info!(%tileset, "using tile set");

    let enriched = wordlist.enrich(&tileset)?;
    match args.format {
        Format::Json => enriched.write_json(&args.output)?,
        #[cfg(feature = "bincode")]
        Format::Bincode => enriched.serialize_to(&args.output)?,
        #[cfg(not(feature = "bincode"))]
        Format::Bincode => anyhow::bail!("bincode output needs the `bincode` feature"),
    }
    info!(output = %args.output.display(), %enriched, "wrote enriched word list");
    Ok(())
}
