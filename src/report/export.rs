use std::{
    fs,
    path::PathBuf,
};

use log::info;
use serde::Serialize;

use crate::{
    core::LexError,
    frequency::FrequencyRecord,
};

pub const REPORT_HEADER: [&str; 4] = ["Word", "Part of Speech", "Frequency", "Count"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub word: String,
    pub part_of_speech: String,
    pub frequency: String,
    pub count: u32,
}

/// Destination for a single named table.
pub trait SheetWriter {
    fn write_sheet(
        &mut self,
        sheet_name: &str,
        header: &[&str],
        rows: &[ReportRow],
    ) -> Result<(), LexError>;
}

/// Writes the sheet as a CSV file. CSV has no notion of sheet names, so the
/// name only shows up in the log.
pub struct CsvSheetWriter {
    path: PathBuf,
}

impl CsvSheetWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SheetWriter for CsvSheetWriter {
    fn write_sheet(
        &mut self,
        sheet_name: &str,
        header: &[&str],
        rows: &[ReportRow],
    ) -> Result<(), LexError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(header)?;
        for row in rows {
            let count = row.count.to_string();
            writer.write_record([&row.word, &row.part_of_speech, &row.frequency, &count])?;
        }
        writer.flush()?;

        info!("Sheet '{}' with {} rows written to {}", sheet_name, rows.len(), self.path.display());
        Ok(())
    }
}

pub fn format_relative_frequency(count: u32, total: u64, decimal_places: usize) -> String {
    let percent = if total == 0 { 0.0 } else { 100.0 * f64::from(count) / total as f64 };
    format!("{:.*}%", decimal_places, percent)
}

/// Report rows ordered by descending count, ties in first-seen order.
pub fn build_rows(record: &FrequencyRecord, decimal_places: usize) -> Vec<ReportRow> {
    let total = record.total();
    record
        .most_common()
        .into_iter()
        .map(|(key, count)| ReportRow {
            word: key.token.clone(),
            part_of_speech: key.category.to_string(),
            frequency: format_relative_frequency(count, total, decimal_places),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        Category,
        LexicalKey,
    };

    #[test]
    fn relative_frequency_uses_configured_precision() {
        assert_eq!(format_relative_frequency(1, 3, 2), "33.33%");
        assert_eq!(format_relative_frequency(1, 3, 0), "33%");
        assert_eq!(format_relative_frequency(2, 8, 3), "25.000%");
        assert_eq!(format_relative_frequency(0, 0, 2), "0.00%");
    }

    #[test]
    fn rows_follow_descending_count() {
        let mut record = FrequencyRecord::new();
        record.add(LexicalKey::new("casa", Category::Noun), 1);
        record.add(LexicalKey::new("hablar", Category::Verb), 3);

        let rows = build_rows(&record, 2);
        assert_eq!(rows[0], ReportRow {
            word: "hablar".to_string(),
            part_of_speech: "verb".to_string(),
            frequency: "75.00%".to_string(),
            count: 3,
        });
        assert_eq!(rows[1].word, "casa");
        assert_eq!(rows[1].frequency, "25.00%");
    }

    #[test]
    fn csv_writer_emits_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.csv");
        let rows = vec![ReportRow {
            word: "canción".to_string(),
            part_of_speech: "noun".to_string(),
            frequency: "100.00%".to_string(),
            count: 4,
        }];

        CsvSheetWriter::new(&path).write_sheet("Word Analysis", &REPORT_HEADER, &rows).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Word,Part of Speech,Frequency,Count\ncanción,noun,100.00%,4\n");
    }
}
