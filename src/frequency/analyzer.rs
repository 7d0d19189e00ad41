use std::{
    collections::BTreeMap,
    path::Path,
};

use log::{
    debug,
    info,
    warn,
};

use super::FrequencyRecord;
use crate::{
    anki::{
        KnownSource,
        KnownVocabulary,
    },
    core::{
        AnalyzerConfig,
        Category,
        FrequencyBand,
        LexicalKey,
        SummaryStats,
    },
    report::{
        self,
        CsvSheetWriter,
        SheetWriter,
        REPORT_HEADER,
    },
    segmentation::{
        LexiconModel,
        LinguisticModel,
        Strategy,
        Tagger,
    },
};

/// Frequency and novelty analysis session.
///
/// Single-writer: callers ingest documents one after another. Parallel
/// ingestion should use one analyzer per worker and [`WordAnalyzer::merge`].
pub struct WordAnalyzer {
    config: AnalyzerConfig,
    tagger: Tagger,
    record: FrequencyRecord,
    known: KnownVocabulary,
}

impl WordAnalyzer {
    pub fn new(config: AnalyzerConfig, tagger: Tagger) -> Self {
        info!("Word analyzer ready ({:?} tagging)", tagger.strategy());
        Self { config, tagger, record: FrequencyRecord::new(), known: KnownVocabulary::new() }
    }

    pub fn rule_based(config: AnalyzerConfig) -> Self {
        Self::new(config, Tagger::rule_based())
    }

    /// Picks the tagging strategy from the configuration: the lexicon model
    /// when POS tagging is enabled and the lexicon loads, otherwise rules.
    pub fn from_config(config: AnalyzerConfig) -> Self {
        let tagger = match (&config.lexicon_path, config.enable_pos_tagging) {
            (Some(path), true) => Tagger::from_model_load(
                LexiconModel::load(path).map(|m| Box::new(m) as Box<dyn LinguisticModel>),
            ),
            (None, true) => {
                info!("No lexicon configured, using rule-based tagging");
                Tagger::rule_based()
            }
            (_, false) => Tagger::rule_based(),
        };
        Self::new(config, tagger)
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn strategy(&self) -> Strategy {
        self.tagger.strategy()
    }

    pub fn classify(&self, token: &str) -> Category {
        self.tagger.classify(token)
    }

    pub fn record(&self) -> &FrequencyRecord {
        &self.record
    }

    pub fn known(&self) -> &KnownVocabulary {
        &self.known
    }

    pub fn ingest(&mut self, text: &str) {
        self.ingest_weighted(text, 1);
    }

    /// Adds every word of `text` with the given weight. Never fails; empty or
    /// malformed input simply contributes nothing.
    pub fn ingest_weighted(&mut self, text: &str, weight: u32) {
        if weight == 0 {
            debug!("Ignoring ingest with zero weight");
            return;
        }

        let keys = self.tagger.tag_text(text, self.config.min_word_length);
        debug!("Ingesting {} tokens with weight {}", keys.len(), weight);
        for key in keys {
            self.record.add(key, weight);
        }
    }

    /// Clears all counts. Known vocabulary is kept.
    pub fn reset(&mut self) {
        self.record.clear();
        info!("Word statistics reset");
    }

    pub fn merge(&mut self, other: &WordAnalyzer) {
        self.record.merge(&other.record);
    }

    pub fn count_of(&self, token: &str, category: Category) -> u32 {
        self.record.get(&LexicalKey::new(token, category))
    }

    /// Occurrences of a bare word across all of its categories.
    pub fn total_for_word(&self, token: &str) -> u32 {
        self.record.iter().filter(|(key, _)| key.token == token).map(|(_, count)| count).sum()
    }

    pub fn is_known(&self, token: &str) -> bool {
        self.known.contains(token)
    }

    pub fn load_known(&mut self, source: KnownSource<'_>) -> bool {
        self.known.load_from(source, self.config.min_word_length)
    }

    pub fn load_known_from_word_list(&mut self, path: &Path) -> bool {
        self.load_known(KnownSource::WordList(path))
    }

    pub fn set_known(&mut self, known: KnownVocabulary) {
        self.known = known;
    }

    pub fn band_of(count: u32) -> FrequencyBand {
        report::band_of(count)
    }

    pub fn top_n(&self, n: usize, exclude_known: bool) -> Vec<(LexicalKey, u32)> {
        report::top_n(&self.record, &self.known, n, exclude_known)
    }

    pub fn new_words(&self, exclude_known: bool) -> Vec<LexicalKey> {
        report::new_words(&self.record, &self.known, exclude_known)
    }

    pub fn categorize_by_band(&self, min_count: u32) -> BTreeMap<FrequencyBand, Vec<LexicalKey>> {
        report::categorize_by_band(&self.record, min_count)
    }

    pub fn summary_stats(&self) -> SummaryStats {
        report::summary_stats(&self.record, &self.known)
    }

    /// Writes the ranked report to a CSV file at `destination`.
    pub fn export_report(&self, destination: &Path) -> bool {
        self.export_with(&mut CsvSheetWriter::new(destination))
    }

    pub fn export_with(&self, writer: &mut dyn SheetWriter) -> bool {
        let rows = report::build_rows(&self.record, self.config.frequency_decimal_places);
        match writer.write_sheet(&self.config.report_sheet_name, &REPORT_HEADER, &rows) {
            Ok(()) => true,
            Err(e) => {
                warn!("Report export failed: {}", e);
                false
            }
        }
    }
}
