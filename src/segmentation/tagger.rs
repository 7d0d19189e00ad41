use std::fmt::Display;

use log::{
    debug,
    warn,
};

use super::{
    rule_matcher::RuleTagger,
    token_models::LinguisticModel,
    tokenizer::normalize,
};
use crate::core::{
    Category,
    LexicalKey,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    ModelBased,
    RuleBased,
}

/// Part-of-speech tagging strategy, chosen once when the session starts.
pub enum Tagger {
    RuleBased(RuleTagger),
    ModelBased { model: Box<dyn LinguisticModel>, fallback: RuleTagger },
}

impl Default for Tagger {
    fn default() -> Self {
        Tagger::RuleBased(RuleTagger::default())
    }
}

impl Tagger {
    pub fn rule_based() -> Self {
        Self::default()
    }

    pub fn with_model(model: Box<dyn LinguisticModel>) -> Self {
        Tagger::ModelBased { model, fallback: RuleTagger::default() }
    }

    /// Uses the model when it loaded. A load failure disables the model-based
    /// path for the whole session.
    pub fn from_model_load<E: Display>(loaded: Result<Box<dyn LinguisticModel>, E>) -> Self {
        match loaded {
            Ok(model) => Self::with_model(model),
            Err(e) => {
                warn!("Linguistic model unavailable ({}), using rule-based tagging", e);
                Self::rule_based()
            }
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Tagger::RuleBased(_) => Strategy::RuleBased,
            Tagger::ModelBased { .. } => Strategy::ModelBased,
        }
    }

    fn rules(&self) -> &RuleTagger {
        match self {
            Tagger::RuleBased(rules) => rules,
            Tagger::ModelBased { fallback, .. } => fallback,
        }
    }

    /// Classifies a single token. Never fails: model errors and `unknown`
    /// model verdicts are resolved by the rule tagger.
    pub fn classify(&self, token: &str) -> Category {
        match self {
            Tagger::RuleBased(rules) => rules.classify(token),
            Tagger::ModelBased { model, fallback } => match model.tag(token) {
                Ok(analyzed) if analyzed.category != Category::Unknown => analyzed.category,
                Ok(_) => fallback.classify(token),
                Err(e) => {
                    warn!("Model '{}' failed to tag '{}': {}", model.name(), token, e);
                    fallback.classify(token)
                }
            },
        }
    }

    /// Turns a text span into lexical keys.
    ///
    /// The rule-based path keys on surface forms from [`normalize`]. The
    /// model-based path keys on lemmas of alphabetic tokens at least
    /// `min_length` characters long, falling back to the rule path for the
    /// whole span when the model fails.
    pub fn tag_text(&self, text: &str, min_length: usize) -> Vec<LexicalKey> {
        if let Tagger::ModelBased { model, fallback } = self {
            match model.analyze(text) {
                Ok(analyzed) => {
                    return analyzed
                        .into_iter()
                        .filter(|t| t.is_alpha && t.surface.chars().count() >= min_length)
                        .filter_map(|t| {
                            let lemma = t.lemma.to_lowercase();
                            if lemma.chars().count() < min_length {
                                return None;
                            }
                            let category = match t.category {
                                Category::Unknown => fallback.classify(&lemma),
                                category => category,
                            };
                            Some(LexicalKey::new(lemma, category))
                        })
                        .collect();
                }
                Err(e) => {
                    warn!("Model '{}' failed on span, using rule-based tagging: {}", model.name(), e);
                }
            }
        }

        let rules = self.rules();
        let keys: Vec<LexicalKey> = normalize(text, min_length)
            .map(|token| {
                let category = rules.classify(&token);
                LexicalKey::new(token, category)
            })
            .collect();
        debug!("Rule-tagged {} tokens", keys.len());
        keys
    }
}
