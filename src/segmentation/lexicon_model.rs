use std::{
    collections::HashMap,
    fs::File,
    io::{
        BufRead,
        BufReader,
    },
    path::Path,
};

use log::{
    info,
    warn,
};

use super::token_models::{
    AnalyzedToken,
    LinguisticModel,
};
use crate::core::{
    Category,
    LexError,
};

#[derive(Debug, Clone)]
struct LexiconEntry {
    lemma: String,
    category: Category,
}

/// Dictionary-backed model read from a `surface<TAB>lemma<TAB>UPOS` file.
///
/// Lookups are case-insensitive. Words missing from the lexicon come back as
/// their own lemma with [`Category::Unknown`].
#[derive(Debug, Default)]
pub struct LexiconModel {
    name: String,
    entries: HashMap<String, LexiconEntry>,
}

impl LexiconModel {
    pub fn load(path: &Path) -> Result<Self, LexError> {
        let reader = BufReader::new(File::open(path)?);
        let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("lexicon").to_string();
        let model = Self::from_reader(name, reader)?;
        if model.is_empty() {
            warn!("Lexicon {} has no entries, every word falls back to rules", path.display());
        } else {
            info!("Loaded lexicon '{}' with {} entries", model.name, model.len());
        }
        Ok(model)
    }

    pub fn from_reader(name: impl Into<String>, reader: impl BufRead) -> Result<Self, LexError> {
        let mut entries = HashMap::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 3 {
                return Err(LexError::Custom(format!(
                    "Lexicon line {} has {} fields, expected 3",
                    line_no + 1,
                    fields.len()
                )));
            }

            let category = Category::from_upos(fields[2]).unwrap_or_else(|e| {
                warn!("Lexicon line {}: {}, using unknown", line_no + 1, e);
                Category::Unknown
            });

            entries.entry(fields[0].to_lowercase()).or_insert(LexiconEntry {
                lemma: fields[1].to_lowercase(),
                category,
            });
        }

        Ok(Self { name: name.into(), entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LinguisticModel for LexiconModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn tag(&self, word: &str) -> Result<AnalyzedToken, LexError> {
        let key = word.to_lowercase();
        Ok(match self.entries.get(&key) {
            Some(entry) => AnalyzedToken::new(word, entry.lemma.clone(), entry.category),
            None => AnalyzedToken::new(word, key, Category::Unknown),
        })
    }

    fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>, LexError> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            let is_edge = |c: char| !c.is_alphanumeric();
            let start = chunk.len() - chunk.trim_start_matches(is_edge).len();
            let end = chunk.trim_end_matches(is_edge).len().max(start);

            let (leading, word, trailing) = (&chunk[..start], &chunk[start..end], &chunk[end..]);
            if !leading.is_empty() {
                tokens.push(AnalyzedToken::new(leading, leading, Category::Punctuation));
            }
            if !word.is_empty() {
                tokens.push(self.tag(word)?);
            }
            if !trailing.is_empty() {
                tokens.push(AnalyzedToken::new(trailing, trailing, Category::Punctuation));
            }
        }
        Ok(tokens)
    }
}
