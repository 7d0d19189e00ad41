use crate::core::{
    Category,
    LexError,
};

/// One token as seen by a linguistic model: surface form, lemma and tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedToken {
    pub surface: String,
    pub lemma: String,
    pub category: Category,
    pub is_alpha: bool,
}

impl AnalyzedToken {
    pub fn new(surface: impl Into<String>, lemma: impl Into<String>, category: Category) -> Self {
        let surface = surface.into();
        let is_alpha = !surface.is_empty() && surface.chars().all(super::tokenizer::is_word_char);
        Self { surface, lemma: lemma.into(), category, is_alpha }
    }
}

/// External model able to lemmatize and tag a single word or a whole span.
pub trait LinguisticModel {
    fn name(&self) -> &str;

    fn tag(&self, word: &str) -> Result<AnalyzedToken, LexError>;

    fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>, LexError>;
}
