//! Word list loading utilities
//!
//! Reads dictionaries from disk in either of two shapes:
//! - plain text, one word per line
//! - JSON, either an object whose keys are the words (the dwyl
//!   `words_dictionary.json` layout) or an array of strings
//!
//! Entries are trimmed and blank entries dropped; no other filtering happens
//! here, that is the index builder's job.

use serde_json::Value;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Where the default dictionary is fetched from when it is missing
pub const DICTIONARY_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words_dictionary.json";

/// File name of the default dictionary
pub const DICTIONARY_FILE: &str = "words_dictionary.json";

/// Error type for word list loading
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Json(serde_json::Error),
    /// JSON parsed but is neither an object nor an array
    UnsupportedJson,
    Download { url: String, reason: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "Invalid JSON word list: {e}"),
            Self::UnsupportedJson => {
                write!(f, "JSON word list must be an object or an array of strings")
            }
            Self::Download { url, reason } => write!(f, "Failed to download {url}: {reason}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Parse dictionary contents, detecting JSON by its first character
///
/// # Errors
///
/// Returns `LoadError::Json` or `LoadError::UnsupportedJson` for bad JSON input.
///
/// # Examples
/// ```
/// use word_holes::wordlists::loader::parse_words;
///
/// let words = parse_words("search\n\n  online \ncourse\n").unwrap();
/// assert_eq!(words, vec!["search", "online", "course"]);
///
/// let words = parse_words(r#"{"search": 1, "online": 1}"#).unwrap();
/// assert_eq!(words, vec!["search", "online"]);
/// ```
pub fn parse_words(content: &str) -> Result<Vec<String>, LoadError> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        parse_json(trimmed)
    } else {
        Ok(parse_lines(content))
    }
}

/// One word per line, trimmed, blank lines skipped
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_json(content: &str) -> Result<Vec<String>, LoadError> {
    let entries: Vec<String> = match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => map.into_iter().map(|(key, _)| key).collect(),
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => return Err(LoadError::UnsupportedJson),
    };

    Ok(entries
        .into_iter()
        .map(|word| word.trim().to_string())
        .filter(|word| !word.is_empty())
        .collect())
}

/// Load words from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its JSON is malformed.
///
/// # Examples
/// ```no_run
/// use word_holes::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words_dictionary.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_words(&content)
}

/// Make sure the dictionary exists at `path`, downloading it if needed
///
/// # Errors
///
/// Returns `LoadError::Download` if `curl` fails or leaves no file behind.
pub fn ensure_dictionary<P: AsRef<Path>>(path: P, url: &str) -> Result<PathBuf, LoadError> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(path.to_path_buf());
    }

    download_dictionary(url, path)?;
    Ok(path.to_path_buf())
}

fn download_dictionary(url: &str, path: &Path) -> Result<(), LoadError> {
    let download_error = |reason: String| LoadError::Download {
        url: url.to_string(),
        reason,
    };

    let status = Command::new("curl")
        .args(["--fail", "--silent", "--show-error", "--location", url, "--output"])
        .arg(path)
        .status()
        .map_err(|e| download_error(format!("could not run curl: {e}")))?;

    if !status.success() {
        // curl --fail may leave a partial file behind
        let _ = fs::remove_file(path);
        return Err(download_error(format!("curl exited with {status}")));
    }

    if !path.exists() {
        return Err(download_error(format!("{} was not created", path.display())));
    }

    Ok(())
}
