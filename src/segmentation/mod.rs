pub mod tokenizer;

pub mod token_models;

pub mod lexicon_model;

pub mod rule_matcher;

pub mod word_rules;

pub mod tagger;

pub use lexicon_model::LexiconModel;
pub use rule_matcher::RuleTagger;
pub use tagger::{
    Strategy,
    Tagger,
};
pub use token_models::{
    AnalyzedToken,
    LinguisticModel,
};
pub use tokenizer::{
    normalize,
    strip_markup,
};

#[cfg(test)]
