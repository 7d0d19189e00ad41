use core::fmt;
use std::{
    collections::BTreeMap,
    str::FromStr,
};

use serde::Serialize;

use super::LexError;

/// Coarse grammatical class of a token.
#[derive(PartialEq, Clone, Copy, Debug, Hash, Eq, PartialOrd, Ord, Serialize)]
pub enum Category {
    Adjective,
    Adposition,
    Adverb,
    AuxiliaryVerb,
    CoordinatingConjunction,
    Determiner,
    Interjection,
    Noun,
    Numeral,
    Particle,
    Pronoun,
    ProperNoun,
    Punctuation,
    SubordinatingConjunction,
    Symbol,
    Verb,
    Unknown,
}

impl Category {
    pub const ALL: [Category; 17] = [
        Category::Adjective,
        Category::Adposition,
        Category::Adverb,
        Category::AuxiliaryVerb,
        Category::CoordinatingConjunction,
        Category::Determiner,
        Category::Interjection,
        Category::Noun,
        Category::Numeral,
        Category::Particle,
        Category::Pronoun,
        Category::ProperNoun,
        Category::Punctuation,
        Category::SubordinatingConjunction,
        Category::Symbol,
        Category::Verb,
        Category::Unknown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Adjective => "adjective",
            Category::Adposition => "adposition",
            Category::Adverb => "adverb",
            Category::AuxiliaryVerb => "auxiliary-verb",
            Category::CoordinatingConjunction => "coordinating-conjunction",
            Category::Determiner => "determiner",
            Category::Interjection => "interjection",
            Category::Noun => "noun",
            Category::Numeral => "numeral",
            Category::Particle => "particle",
            Category::Pronoun => "pronoun",
            Category::ProperNoun => "proper-noun",
            Category::Punctuation => "punctuation",
            Category::SubordinatingConjunction => "subordinating-conjunction",
            Category::Symbol => "symbol",
            Category::Verb => "verb",
            Category::Unknown => "unknown",
        }
    }

    /// Maps a Universal Dependencies tag (`NOUN`, `CCONJ`, ...) onto a category.
    pub fn from_upos(tag: &str) -> Result<Self, LexError> {
        let category = match tag.trim().to_ascii_uppercase().as_str() {
            "ADJ" => Category::Adjective,
            "ADP" => Category::Adposition,
            "ADV" => Category::Adverb,
            "AUX" => Category::AuxiliaryVerb,
            "CCONJ" | "CONJ" => Category::CoordinatingConjunction,
            "DET" => Category::Determiner,
            "INTJ" => Category::Interjection,
            "NOUN" => Category::Noun,
            "NUM" => Category::Numeral,
            "PART" => Category::Particle,
            "PRON" => Category::Pronoun,
            "PROPN" => Category::ProperNoun,
            "PUNCT" => Category::Punctuation,
            "SCONJ" => Category::SubordinatingConjunction,
            "SYM" => Category::Symbol,
            "VERB" => Category::Verb,
            "X" => Category::Unknown,
            other => return Err(LexError::InvalidCategory(other.to_string())),
        };
        Ok(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = LexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.label() == s)
            .copied()
            .ok_or_else(|| LexError::InvalidCategory(s.to_string()))
    }
}

/// Accounting unit for frequency: a normalized token plus its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LexicalKey {
    pub token: String,
    pub category: Category,
}

impl LexicalKey {
    pub fn new(token: impl Into<String>, category: Category) -> Self {
        Self { token: token.into(), category }
    }
}

impl fmt::Display for LexicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.token, self.category)
    }
}

/// Frequency tier derived from an absolute count. Ordered from most to least frequent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FrequencyBand {
    VeryFrequent,
    Frequent,
    Medium,
    Rare,
    VeryRare,
}

impl FrequencyBand {
    pub const ALL: [FrequencyBand; 5] = [
        FrequencyBand::VeryFrequent,
        FrequencyBand::Frequent,
        FrequencyBand::Medium,
        FrequencyBand::Rare,
        FrequencyBand::VeryRare,
    ];

    pub fn of(count: u32) -> Self {
        match count {
            c if c > 100 => FrequencyBand::VeryFrequent,
            c if c > 50 => FrequencyBand::Frequent,
            c if c > 20 => FrequencyBand::Medium,
            c if c > 5 => FrequencyBand::Rare,
            _ => FrequencyBand::VeryRare,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FrequencyBand::VeryFrequent => "very-frequent",
            FrequencyBand::Frequent => "frequent",
            FrequencyBand::Medium => "medium",
            FrequencyBand::Rare => "rare",
            FrequencyBand::VeryRare => "very-rare",
        }
    }
}

impl fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub unique_words: usize,
    pub total_occurrences: u64,
    pub known_words: usize,
    pub new_words: usize,
    pub average_frequency: f64,
    pub bands: BTreeMap<FrequencyBand, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
        assert!("adjectival".parse::<Category>().is_err());
    }

    #[test]
    fn upos_tags_map_to_categories() {
        assert_eq!(Category::from_upos("PROPN").unwrap(), Category::ProperNoun);
        assert_eq!(Category::from_upos("sconj").unwrap(), Category::SubordinatingConjunction);
        assert_eq!(Category::from_upos("X").unwrap(), Category::Unknown);
        assert!(Category::from_upos("FOO").is_err());
    }

    #[test]
    fn band_boundaries_are_half_open() {
        assert_eq!(FrequencyBand::of(101), FrequencyBand::VeryFrequent);
        assert_eq!(FrequencyBand::of(100), FrequencyBand::Frequent);
        assert_eq!(FrequencyBand::of(51), FrequencyBand::Frequent);
        assert_eq!(FrequencyBand::of(50), FrequencyBand::Medium);
        assert_eq!(FrequencyBand::of(21), FrequencyBand::Medium);
        assert_eq!(FrequencyBand::of(20), FrequencyBand::Rare);
        assert_eq!(FrequencyBand::of(6), FrequencyBand::Rare);
        assert_eq!(FrequencyBand::of(5), FrequencyBand::VeryRare);
        assert_eq!(FrequencyBand::of(1), FrequencyBand::VeryRare);
    }

    #[test]
    fn bands_are_monotonic_in_count() {
        // Lower ordinal means more frequent.
        let mut previous = FrequencyBand::of(1);
        for count in 2..=300 {
            let band = FrequencyBand::of(count);
            assert!(band <= previous, "band for {} is less frequent than for {}", count, count - 1);
            previous = band;
        }
    }

    #[test]
    fn key_display_keeps_word_and_category() {
        let key = LexicalKey::new("casa", Category::Noun);
        assert_eq!(key.to_string(), "casa (noun)");
    }
}
