//! Word Holes - CLI
//!
//! Finds four-letter answers hidden in groups of six-letter words and shows
//! one of them as a puzzle.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use word_holes::{
    commands::{ShowConfig, compute_stats, list_puzzles, lookup_answer, show_puzzle},
    output::{print_list_result, print_lookup_result, print_show_result, print_stats_result},
    puzzle::{BuildMode, DEFAULT_PLACEHOLDER, PuzzleGenerator, RandomRange},
    validate::ValidatorConfig,
    wordlists::{
        SAMPLE_WORDS,
        loader::{DICTIONARY_FILE, DICTIONARY_URL, ensure_dictionary, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "word_holes",
    about = "Find four-letter answers hidden in six-letter words and play them as puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'dictionary' (default, downloaded if missing), 'embedded', or path to file
    #[arg(short = 'w', long, global = true, default_value = "dictionary")]
    wordlist: String,

    /// Fewest words a puzzle may have
    #[arg(long, global = true, default_value_t = ValidatorConfig::DEFAULT_MIN_WORDS)]
    min_words: usize,

    /// Most words a puzzle may have
    #[arg(long, global = true, default_value_t = ValidatorConfig::DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Minimum number of differing letters between any two puzzle words
    #[arg(long, global = true, default_value_t = ValidatorConfig::DEFAULT_MIN_DISTANCE)]
    min_distance: usize,

    /// Reject puzzles whose words all end in the same letter
    #[arg(long, global = true)]
    distinct_last_letter: bool,

    /// Build the answer index on all cores
    #[arg(long, global = true)]
    parallel: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one puzzle (default)
    Show {
        /// Puzzle number; random if omitted
        #[arg(short, long)]
        index: Option<usize>,

        /// Also print the answer
        #[arg(short = 'a', long = "answer")]
        reveal: bool,

        /// Character used to hide answer letters
        #[arg(long, default_value_t = DEFAULT_PLACEHOLDER)]
        placeholder: char,

        /// Draw random indices from 0..=count, the historical behavior (may overshoot)
        #[arg(long)]
        inclusive_random: bool,
    },

    /// List valid puzzles with their numbers
    List {
        /// Maximum number of puzzles to print
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,

        /// First puzzle number to print
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Print every puzzle
        #[arg(long)]
        all: bool,
    },

    /// Show the words behind an answer and whether it is a valid puzzle
    Lookup {
        /// Four-letter answer
        answer: String,
    },

    /// Summarize the word list and validation results
    Stats,
}

impl Cli {
    const fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig {
            min_words: self.min_words,
            max_words: self.max_words,
            min_distance: self.min_distance,
            distinct_last_letter: self.distinct_last_letter,
        }
    }

    const fn build_mode(&self) -> BuildMode {
        if self.parallel {
            BuildMode::Parallel
        } else {
            BuildMode::Sequential
        }
    }
}

/// Load the word list based on the -w flag
///
/// - "dictionary": `words_dictionary.json` in the working directory, downloaded once if missing
/// - "embedded": the sample list compiled into the binary
/// - "<path>": a plain-text or JSON word list
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<String>> {
    let words = match wordlist_mode {
        "dictionary" => {
            if !std::path::Path::new(DICTIONARY_FILE).exists() {
                eprintln!(
                    "{} {} not found, downloading...",
                    "⬇".cyan(),
                    DICTIONARY_FILE
                );
            }
            let path = ensure_dictionary(DICTIONARY_FILE, DICTIONARY_URL)
                .context("could not obtain the default dictionary")?;
            load_from_file(&path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        "embedded" => SAMPLE_WORDS.iter().map(ToString::to_string).collect(),
        path => load_from_file(path).with_context(|| format!("failed to load word list {path}"))?,
    };

    if words.is_empty() {
        bail!("word list '{wordlist_mode}' contains no words");
    }

    Ok(words)
}

fn build_generator(
    words: &[String],
    config: ValidatorConfig,
    mode: BuildMode,
) -> Result<PuzzleGenerator> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Indexing {} words...", words.len()));

    let generator = PuzzleGenerator::new(words, config, mode)?;
    spinner.finish_and_clear();

    eprintln!(
        "{} {} valid puzzles from {} six-letter words",
        "✓".green(),
        generator.puzzles().len(),
        generator.index().word_count()
    );

    Ok(generator)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    let generator = build_generator(&words, cli.validator_config(), cli.build_mode())?;

    // Default to Show mode if no command given
    let command = cli.command.unwrap_or(Commands::Show {
        index: None,
        reveal: false,
        placeholder: DEFAULT_PLACEHOLDER,
        inclusive_random: false,
    });

    match command {
        Commands::Show {
            index,
            reveal,
            placeholder,
            inclusive_random,
        } => {
            let config = ShowConfig {
                index,
                reveal,
                placeholder,
                random_range: if inclusive_random {
                    RandomRange::Inclusive
                } else {
                    RandomRange::Exclusive
                },
            };
            run_show_command(&config, &generator)
        }
        Commands::List { limit, offset, all } => {
            let limit = if all { None } else { Some(limit) };
            print_list_result(&list_puzzles(&generator, offset, limit));
            Ok(())
        }
        Commands::Lookup { answer } => {
            let result = lookup_answer(&answer, &generator).map_err(|e| anyhow::anyhow!(e))?;
            print_lookup_result(&result);
            Ok(())
        }
        Commands::Stats => {
            print_stats_result(&compute_stats(&generator));
            Ok(())
        }
    }
}

fn run_show_command(config: &ShowConfig, generator: &PuzzleGenerator) -> Result<()> {
    let result = show_puzzle(config, generator, &mut rand::rng())?;
    print_show_result(&result);
    Ok(())
}
