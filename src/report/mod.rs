use std::collections::{
    BTreeMap,
    HashSet,
};

use crate::{
    anki::KnownVocabulary,
    core::{
        FrequencyBand,
        LexicalKey,
        SummaryStats,
    },
    frequency::FrequencyRecord,
};

pub mod export;
pub mod retention;

pub use export::{
    build_rows,
    CsvSheetWriter,
    ReportRow,
    SheetWriter,
    REPORT_HEADER,
};

pub fn band_of(count: u32) -> FrequencyBand {
    FrequencyBand::of(count)
}

fn ranked<'a>(
    record: &'a FrequencyRecord,
    known: &'a KnownVocabulary,
    exclude_known: bool,
) -> impl Iterator<Item = (&'a LexicalKey, u32)> + 'a {
    record.most_common().into_iter().filter(move |(key, _)| !exclude_known || !known.contains(&key.token))
}

/// The `n` most frequent entries, optionally skipping known words before truncating.
pub fn top_n(
    record: &FrequencyRecord,
    known: &KnownVocabulary,
    n: usize,
    exclude_known: bool,
) -> Vec<(LexicalKey, u32)> {
    ranked(record, known, exclude_known).take(n).map(|(key, count)| (key.clone(), count)).collect()
}

pub fn new_words(
    record: &FrequencyRecord,
    known: &KnownVocabulary,
    exclude_known: bool,
) -> Vec<LexicalKey> {
    ranked(record, known, exclude_known).map(|(key, _)| key.clone()).collect()
}

/// Keys grouped by band, most frequent first inside each band. Every band is present.
pub fn categorize_by_band(
    record: &FrequencyRecord,
    min_count: u32,
) -> BTreeMap<FrequencyBand, Vec<LexicalKey>> {
    let mut bands: BTreeMap<FrequencyBand, Vec<LexicalKey>> =
        FrequencyBand::ALL.iter().map(|band| (*band, Vec::new())).collect();

    for (key, count) in record.most_common() {
        if count < min_count {
            continue;
        }
        bands.entry(FrequencyBand::of(count)).or_default().push(key.clone());
    }
    bands
}

pub fn summary_stats(record: &FrequencyRecord, known: &KnownVocabulary) -> SummaryStats {
    let bare_words: HashSet<&str> = record.iter().map(|(key, _)| key.token.as_str()).collect();
    let unique_words = bare_words.len();
    let total_occurrences = record.total();
    let known_words = bare_words.iter().filter(|word| known.contains(word)).count();

    let mut bands: BTreeMap<FrequencyBand, usize> =
        FrequencyBand::ALL.iter().map(|band| (*band, 0)).collect();
    for (_, count) in record.iter() {
        *bands.entry(FrequencyBand::of(count)).or_insert(0) += 1;
    }

    let average_frequency = if unique_words == 0 {
        0.0
    } else {
        total_occurrences as f64 / unique_words as f64
    };

    SummaryStats {
        unique_words,
        total_occurrences,
        known_words,
        new_words: unique_words - known_words,
        average_frequency,
        bands,
    }
}
