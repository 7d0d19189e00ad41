use std::{
    collections::HashSet,
    fs,
    path::Path,
};

use log::{
    info,
    warn,
};

use crate::{
    core::LexError,
    segmentation::{
        normalize,
        strip_markup,
    },
};

pub mod api;

pub use api::AnkiConnect;

pub type NoteId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteText {
    pub note_id: NoteId,
    pub texts: Vec<String>,
}

/// Flashcard store used only as a source of already-known words.
/// Its connection lifecycle belongs to the caller.
pub trait FlashcardProvider {
    fn is_connected(&self) -> bool;

    fn find_note_ids_by_deck_pattern(&self, pattern: &str) -> Result<Vec<NoteId>, LexError>;

    fn extract_field_text(
        &self,
        note_ids: &[NoteId],
        field_names: &[String],
    ) -> Result<Vec<NoteText>, LexError>;
}

pub enum KnownSource<'a> {
    Flashcards { provider: &'a dyn FlashcardProvider, deck_pattern: &'a str, field_names: &'a [String] },
    WordList(&'a Path),
}

/// Bare words the learner already knows. Replaced wholesale on every successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownVocabulary {
    words: HashSet<String>,
}

impl KnownVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn replace(&mut self, words: HashSet<String>) {
        self.words = words;
    }

    /// Loads from `source`, replacing the current set. On failure the previous
    /// set is kept and `false` is returned.
    pub fn load_from(&mut self, source: KnownSource<'_>, min_word_length: usize) -> bool {
        let loaded = match source {
            KnownSource::Flashcards { provider, deck_pattern, field_names } => {
                words_from_flashcards(provider, deck_pattern, field_names, min_word_length)
            }
            KnownSource::WordList(path) => words_from_list(path),
        };

        match loaded {
            Ok(words) => {
                info!("Loaded {} known words", words.len());
                self.replace(words);
                true
            }
            Err(e) => {
                warn!("Known vocabulary not loaded: {}", e);
                false
            }
        }
    }
}

impl FromIterator<String> for KnownVocabulary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self { words: iter.into_iter().collect() }
    }
}

pub fn words_from_flashcards(
    provider: &dyn FlashcardProvider,
    deck_pattern: &str,
    field_names: &[String],
    min_word_length: usize,
) -> Result<HashSet<String>, LexError> {
    if !provider.is_connected() {
        return Err(LexError::ProviderUnavailable("flashcard provider is not connected".into()));
    }

    let note_ids = provider.find_note_ids_by_deck_pattern(deck_pattern)?;
    if note_ids.is_empty() {
        return Err(LexError::ProviderUnavailable(format!(
            "no notes found for deck pattern '{}'",
            deck_pattern
        )));
    }
    info!("Found {} notes matching '{}'", note_ids.len(), deck_pattern);

    let notes = provider.extract_field_text(&note_ids, field_names)?;
    let words = notes
        .iter()
        .flat_map(|note| note.texts.iter())
        .filter(|text| !text.is_empty())
        .flat_map(|text| normalize(&strip_markup(text), min_word_length).collect::<Vec<_>>())
        .collect();
    Ok(words)
}

/// One lower-cased word per line, blank lines skipped.
pub fn words_from_list(path: &Path) -> Result<HashSet<String>, LexError> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect())
}
