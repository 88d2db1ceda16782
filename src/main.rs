//! Trie Dictionary - command-line entrypoint.
//!
//! Loads a word list into a trie and answers lookup, autocomplete and
//! spelling queries against it. Results go to stdout; logs go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use trie_dictionary_lib::config::{AppConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use trie_dictionary_lib::data_structures::trie::{Trie, TreePrinter};
use trie_dictionary_lib::dictionary::{self, LoadReport};
use trie_dictionary_lib::error::{
    report_error, set_error_reporter, DictionaryError, DictionaryResult, ErrorContext,
    TracingErrorReporter,
};

/// Command line arguments for the trie dictionary.
#[derive(Parser, Debug)]
#[clap(name = "trie_dictionary", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, one word per line (overrides dictionary.words_file)
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a word is in the dictionary
    Search {
        /// Word to look up
        word: String,
    },

    /// List dictionary words starting with a prefix
    Suggest {
        /// Prefix to complete
        prefix: String,
    },

    /// Suggest spellings within edit distance 2
    Spell {
        /// Possibly misspelled word
        word: String,
    },

    /// List every word in the dictionary
    List,

    /// Print the trie structure
    Tree,

    /// Show word list load statistics
    Stats,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    word: &'a str,
    found: bool,
}

#[derive(Serialize)]
struct StatsOutput {
    words: usize,
    #[serde(flatten)]
    report: LoadReport,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> DictionaryResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| {
        DictionaryError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Build the trie from the word list named on the command line or in the config.
fn load_trie(args: &Args, config: &AppConfig) -> DictionaryResult<(Trie, LoadReport)> {
    let source = args.words.as_ref().or(config.dictionary.words_file.as_ref());
    match source {
        Some(path) => {
            info!(path = %path.display(), "loading word list");
            dictionary::load_words_file(path, config.trie.clone())
        }
        None => {
            debug!("no word list configured, starting with an empty dictionary");
            Ok((Trie::with_config(config.trie.clone()), LoadReport::default()))
        }
    }
}

/// Print a list of words, one per line or as a JSON array.
fn print_words(words: &[String], json: bool) -> DictionaryResult<()> {
    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(words)?)?;
    } else {
        for word in words {
            writeln!(out, "{word}")?;
        }
    }
    Ok(())
}

fn run(args: Args, config: AppConfig) -> DictionaryResult<()> {
    match &args.command {
        Command::Validate => {
            info!("configuration validated successfully");
            println!("configuration OK");
            Ok(())
        }
        Command::GenConfig { output } => {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&AppConfig::default())
                .map_err(|e| DictionaryError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(output, toml)?;

            info!(path = %output.display(), "default configuration written");
            Ok(())
        }
        command => {
            let (trie, report) = load_trie(&args, &config)?;

            match command {
                Command::Search { word } => {
                    let found = trie.search(word);
                    if args.json {
                        println!("{}", serde_json::to_string(&SearchOutput {
                            word: word.as_str(),
                            found,
                        })?);
                    } else {
                        println!("{}", if found { "found" } else { "not found" });
                    }
                    Ok(())
                }
                Command::Suggest { prefix } => print_words(&trie.auto_suggest(prefix), args.json),
                Command::Spell { word } => {
                    print_words(&trie.spelling_suggestions(word), args.json)
                }
                Command::List => print_words(&trie.get_all_words(), args.json),
                Command::Tree => Ok(TreePrinter::print_tree(io::stdout().lock(), &trie)?),
                Command::Stats => {
                    let stats = StatsOutput {
                        words: trie.len(),
                        report,
                    };
                    if args.json {
                        println!("{}", serde_json::to_string_pretty(&stats)?);
                    } else {
                        println!(
                            "words: {}\ninserted: {}\nduplicates: {}\nrejected: {}",
                            stats.words, report.inserted, report.duplicates, report.rejected
                        );
                    }
                    Ok(())
                }
                Command::Validate | Command::GenConfig { .. } => Ok(()),
            }
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            // Logging is configured from the file, so fall back to defaults here.
            let _ = init_logging(&LogConfig::default());
            set_error_reporter(Arc::new(TracingErrorReporter));
            let mut context = ErrorContext::new(e.into(), "config");
            if let Some(path) = &args.config {
                context = context.with_details(format!("config file: {}", path.display()));
            }
            report_error(context);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let words_file = args
        .words
        .clone()
        .or_else(|| config.dictionary.words_file.clone());
    if let Err(e) = run(args, config) {
        let mut context = ErrorContext::new(e, "cli");
        if let Some(path) = words_file {
            context = context.with_details(format!("words file: {}", path.display()));
        }
        report_error(context);
        process::exit(1);
    }
}
