//! Accepted-word dictionary

use rustc_hash::FxHashSet;

/// Case-insensitive set of accepted words
///
/// Words are stored uppercase; lookups normalize to uppercase.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// An empty dictionary, which accepts nothing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from raw entries
    ///
    /// Entries are trimmed; blank entries and entries with anything other
    /// than ASCII letters are skipped.
    ///
    /// # Examples
    /// ```
    /// use skrabbkle::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["hi", " Cat ", "", "no-way"]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("HI"));
    /// assert!(dict.contains("cat"));
    /// assert!(!dict.contains("no-way"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|entry| normalize(entry.as_ref()))
            .collect();
        Self { words }
    }

    /// Whether `word` is accepted, ignoring case
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().all(|b| b.is_ascii_uppercase()) {
            return self.words.contains(word);
        }
        self.words.contains(&word.to_ascii_uppercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(entry: &str) -> Option<String> {
    let trimmed = entry.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}
