//! Lexical frequency and novelty analysis for language learners.
//!
//! Text is normalized and tagged ([`segmentation`]), counted per word and
//! category ([`frequency`]), compared against words already known from a
//! flashcard deck or word list ([`anki`]) and reported ([`report`]).

pub mod anki;
pub mod core;
pub mod frequency;
pub mod report;
pub mod segmentation;

pub use crate::{
    anki::{
        FlashcardProvider,
        KnownSource,
        KnownVocabulary,
    },
    core::{
        AnalyzerConfig,
        Category,
        FrequencyBand,
        LexError,
        LexicalKey,
        SummaryStats,
    },
    frequency::{
        FrequencyRecord,
        WordAnalyzer,
    },
    segmentation::{
        LinguisticModel,
        Strategy,
        Tagger,
    },
};
