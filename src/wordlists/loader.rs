//! Word list loading utilities
//!
//! Loads word-list sources from flat files, normalizing entries the same way
//! the dictionary store expects them: trimmed, lowercased, blank lines
//! dropped.

use std::fs;
use std::io;
use std::path::Path;

/// Load a word list from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use quartiles_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/twl06.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect();

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file_normalizes() {
        let dir = std::env::temp_dir();
        let path = dir.join("quartiles_solver_loader_test.txt");
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "CAT").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "  quest  ").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(words, vec!["cat", "quest"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/nonexistent/wordlist.txt").is_err());
    }

    #[test]
    fn load_bundled_lists() {
        let twl06 = load_from_file("data/twl06.txt").unwrap();
        let enable = load_from_file("data/enable.txt").unwrap();
        assert!(!twl06.is_empty());
        assert!(!enable.is_empty());
    }
}
