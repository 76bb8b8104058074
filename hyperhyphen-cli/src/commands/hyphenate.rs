//! Hyphenate command implementation

use crate::config::CliConfig;
use crate::dictionary_source::{open_store, DictionarySource};
use crate::error::CliError;
use crate::input::WordReader;
use anyhow::{Context, Result};
use clap::{ArgAction, Args};
use hyperhyphen_core::{
    Dictionary, FormatError, FormatOptions, HyphenOptions, Repository, WordFormatter,
    DEFAULT_REPOSITORY,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Environment variable naming the dictionary file
pub const DICT_PATH_ENV: &str = "HYPH_DICT_PATH";

/// Arguments for hyphenating words from standard input
#[derive(Debug, Args)]
pub struct HyphenateArgs {
    /// Dictionary file (hyph_*.dic)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Print words unchanged when a break would alter their spelling
    #[arg(short = 's', long = "standard")]
    pub standard_only: bool,

    /// List every break candidate after each word
    #[arg(short = 'd', long = "candidates")]
    pub list_candidates: bool,

    /// Print break values (-n) or character counts between breaks (-nn)
    #[arg(short = 'n', action = ArgAction::Count)]
    pub numbers: u8,

    /// Use the installed dictionary for a language code
    #[arg(short, long = "lang", value_name = "CODE")]
    pub language: Option<String>,

    /// Directory of installed dictionaries
    #[arg(long, value_name = "DIR")]
    pub dict_dir: Option<PathBuf>,

    /// List installed dictionaries and exit
    #[arg(long)]
    pub list_dicts: bool,

    /// Download the dictionary for a language code into the store and exit
    #[arg(long, value_name = "CODE", conflicts_with = "uninstall")]
    pub install: Option<String>,

    /// Remove the installed dictionary for a language code and exit
    #[arg(long, value_name = "CODE")]
    pub uninstall: Option<String>,

    /// Replace an installed dictionary when installing
    #[arg(long, requires = "install")]
    pub force: bool,

    /// Dictionary repository to download from
    #[arg(long, value_name = "URL")]
    pub repository: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "HYPHENATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum characters before the first break
    #[arg(long, value_name = "N")]
    pub left_min: Option<usize>,

    /// Minimum characters after the last break
    #[arg(long, value_name = "N")]
    pub right_min: Option<usize>,

    /// Minimum characters before a break inside a compound part
    #[arg(long, value_name = "N")]
    pub compound_left_min: Option<usize>,

    /// Minimum characters after a break inside a compound part
    #[arg(long, value_name = "N")]
    pub compound_right_min: Option<usize>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl HyphenateArgs {
    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        if self.list_dicts {
            return self.list_dictionaries(&config);
        }
        if let Some(language) = &self.install {
            return self.install_dictionary(&config, language);
        }
        if let Some(language) = &self.uninstall {
            return self.uninstall_dictionary(&config, language);
        }

        let env_path = env::var_os(DICT_PATH_ENV).map(PathBuf::from);
        let source = self
            .dictionary_source(&config, env_path)
            .ok_or(CliError::MissingDictionary)?;
        log::info!("Dictionary source: {}", source.display_name());

        let path = source.resolve()?;
        let dictionary = Dictionary::load(&path)
            .with_context(|| CliError::DictionaryLoad(path.display().to_string()))?;
        log::info!(
            "Loaded {} patterns and {} compound patterns ({})",
            dictionary.pattern_count(),
            dictionary.compound_pattern_count(),
            dictionary.charset()
        );

        let formatter = WordFormatter::new(&dictionary)
            .with_hyphen_options(self.hyphen_options(&config))
            .with_format(self.format_options());

        let stdin = io::stdin();
        let stdout = io::stdout();
        let count = hyphenate_stream(&formatter, stdin.lock(), &mut stdout.lock())?;
        log::info!("Hyphenated {count} words");

        Ok(())
    }

    /// Pick the dictionary: command line, then environment, then config
    pub fn dictionary_source(
        &self,
        config: &CliConfig,
        env_path: Option<PathBuf>,
    ) -> Option<DictionarySource> {
        let directory = self
            .dict_dir
            .clone()
            .or_else(|| config.dictionary.directory.clone());

        if let Some(path) = &self.dictionary {
            return Some(DictionarySource::File(path.clone()));
        }
        if let Some(language) = &self.language {
            return Some(DictionarySource::Installed {
                language: language.clone(),
                directory,
            });
        }
        if let Some(path) = env_path.or_else(|| config.dictionary.path.clone()) {
            return Some(DictionarySource::File(path));
        }
        config
            .dictionary
            .language
            .clone()
            .map(|language| DictionarySource::Installed {
                language,
                directory,
            })
    }

    /// Config values with command-line overrides applied
    pub fn hyphen_options(&self, config: &CliConfig) -> HyphenOptions {
        let mut options = config.hyphenation;
        if let Some(n) = self.left_min {
            options.left_min = n;
        }
        if let Some(n) = self.right_min {
            options.right_min = n;
        }
        if let Some(n) = self.compound_left_min {
            options.compound_left_min = n;
        }
        if let Some(n) = self.compound_right_min {
            options.compound_right_min = n;
        }
        options
    }

    /// Output representation selected by the flags
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            vector: self.numbers == 1,
            standard_only: self.standard_only,
            chunk_lengths: self.numbers >= 2,
            list_candidates: self.list_candidates,
        }
    }

    /// Repository URL: command line, then config, then LibreOffice
    pub fn repository_url(&self, config: &CliConfig) -> String {
        self.repository
            .clone()
            .or_else(|| config.dictionary.repository.clone())
            .unwrap_or_else(|| DEFAULT_REPOSITORY.to_string())
    }

    fn store_directory<'a>(&'a self, config: &'a CliConfig) -> Option<&'a Path> {
        self.dict_dir
            .as_deref()
            .or(config.dictionary.directory.as_deref())
    }

    fn install_dictionary(&self, config: &CliConfig, language: &str) -> Result<()> {
        let store = open_store(self.store_directory(config))?;
        let url = self.repository_url(config);
        let repository = Repository::new(url.as_str())
            .context("Failed to set up the HTTP client")?;
        let path = repository
            .install(&store, language, self.force)
            .with_context(|| format!("Failed to install dictionary for '{language}' from {url}"))?;
        writeln!(io::stdout(), "{}", path.display())?;
        Ok(())
    }

    fn uninstall_dictionary(&self, config: &CliConfig, language: &str) -> Result<()> {
        let store = open_store(self.store_directory(config))?;
        let removed = store
            .remove(language)
            .with_context(|| format!("Failed to remove dictionary for '{language}'"))?;
        if !removed {
            log::warn!("No dictionary installed for '{}'", language);
        }
        Ok(())
    }

    fn list_dictionaries(&self, config: &CliConfig) -> Result<()> {
        let store = open_store(self.store_directory(config))?;
        let languages = store
            .installed_languages()
            .context("Failed to list installed dictionaries")?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for language in languages {
            writeln!(out, "{language}")?;
        }
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

/// Hyphenate one word per input line until the input ends
///
/// Returns the number of words written. A closed output ends the loop
/// without error.
pub fn hyphenate_stream<R: BufRead, W: Write>(
    formatter: &WordFormatter<'_>,
    input: R,
    out: &mut W,
) -> Result<usize> {
    let mut words = WordReader::new(input);
    let mut count = 0;

    while let Some(word) = words.next_word().context("Failed to read input")? {
        match write_word(formatter, word, out) {
            Ok(()) => count += 1,
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                log::debug!("Output closed after {count} words");
                break;
            }
            Err(err) => return Err(err).context("Failed to write output"),
        }
    }

    Ok(count)
}

fn write_word<W: Write>(formatter: &WordFormatter<'_>, word: &[u8], out: &mut W) -> io::Result<()> {
    match formatter.write_word(word, out) {
        Ok(()) => {}
        Err(FormatError::Hyphenation(err)) => {
            log::warn!("Cannot hyphenate '{}': {}", String::from_utf8_lossy(word), err);
            out.write_all(word)?;
            out.write_all(b"\n")?;
        }
        Err(FormatError::Io(err)) => return Err(err),
    }
    out.flush()
}
