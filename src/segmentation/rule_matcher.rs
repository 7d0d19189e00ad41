use super::word_rules::create_default_rules;
use crate::core::Category;

/**
 * Single-token classification written as an ordered list of rules instead of
 * nested conditionals. Closed word lists come first, then suffix checks.
 */

pub enum TokenMatcher {
    /// Exact membership in a closed word list.
    Word(&'static [&'static str]),
    /// Token ends with any of the suffixes and keeps at least `min_stem` characters in front of it.
    Suffix { suffixes: &'static [&'static str], min_stem: usize },
    /// Spelled-out cardinal or ordinal numbers.
    Numeral(&'static [&'static str]),
}

impl TokenMatcher {
    pub fn matches(&self, token: &str) -> bool {
        match self {
            TokenMatcher::Word(words) => words.contains(&token),
            TokenMatcher::Suffix { suffixes, min_stem } => suffixes.iter().any(|suffix| {
                token.ends_with(suffix)
                    && token.chars().count() >= suffix.chars().count() + min_stem
            }),
            TokenMatcher::Numeral(numbers) => {
                (!token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
                    || numbers.contains(&token)
            }
        }
    }
}

pub struct Rule {
    pub name: &'static str,
    pub matcher: TokenMatcher,
    pub category: Category,
}

pub struct RuleTagger {
    rules: Vec<Rule>,
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new(create_default_rules())
    }
}

impl RuleTagger {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// First matching rule wins; no match yields [`Category::Unknown`].
    pub fn classify(&self, token: &str) -> Category {
        self.matching_rule(token).map_or(Category::Unknown, |rule| rule.category)
    }

    pub fn matching_rule(&self, token: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matcher.matches(token))
    }
}
