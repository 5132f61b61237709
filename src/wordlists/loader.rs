//! Word list loading utilities
//!
//! Reads newline-delimited word lists into a [`Dictionary`].

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load a dictionary from a file, one word per line
///
/// Blank and non-alphabetic lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use skrabbkle::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/wordlist.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path.as_ref())?;
    let dictionary = Dictionary::from_words(content.lines());
    debug!(path = %path.as_ref().display(), words = dictionary.len(), "loaded word list");
    Ok(dictionary)
}

/// Load a dictionary, falling back to an empty one if the file is unreadable
///
/// An empty dictionary makes the computer pass every turn but keeps the game
/// playable.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Dictionary {
    match load_from_file(path.as_ref()) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            warn!(
                path = %path.as_ref().display(),
                error = %e,
                "could not load word list; using an empty dictionary"
            );
            Dictionary::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("skrabbkle-{}-{name}", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_words_from_file() {
        let path = temp_file("words.txt", "hi\ncat\n\n  dog  \nbad word\n");
        let dictionary = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("HI"));
        assert!(dictionary.contains("DOG"));
    }

    #[test]
    fn handles_crlf_line_endings() {
        let path = temp_file("crlf.txt", "hi\r\ncat\r\n");
        let dictionary = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(dictionary.contains("CAT"));
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let dictionary = load_or_empty("/definitely/not/here/words.txt");
        assert!(dictionary.is_empty());
    }
}
