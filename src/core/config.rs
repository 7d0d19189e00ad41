use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use log::{
    info,
    warn,
};
use serde::{
    Deserialize,
    Serialize,
};

use super::LexError;

const APP_NAME: &str = "lexmine";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub min_word_length: usize,
    pub deck_pattern: String,
    pub field_names: Vec<String>,
    pub frequency_decimal_places: usize,
    pub report_sheet_name: String,
    pub enable_pos_tagging: bool,
    pub lexicon_path: Option<PathBuf>,
    pub anki_url: String,
    pub results_folder: PathBuf,
    pub max_results_files: usize,
    pub results_filename_prefix: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_word_length: 3,
            deck_pattern: "Spanish*".to_string(),
            field_names: vec!["FrontText".to_string(), "BackText".to_string()],
            frequency_decimal_places: 2,
            report_sheet_name: "Word Analysis".to_string(),
            enable_pos_tagging: true,
            lexicon_path: None,
            anki_url: "http://localhost:8765/".to_string(),
            results_folder: PathBuf::from("data/results"),
            max_results_files: 20,
            results_filename_prefix: "vocabulary_analysis".to_string(),
        }
    }
}

impl AnalyzerConfig {
    pub fn load(path: &Path) -> Result<Self, LexError> {
        let json = fs::read_to_string(path)?;
        let config: AnalyzerConfig = serde_json::from_str(&json)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No configuration at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), LexError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        match dirs::data_local_dir() {
            Some(data_dir) => data_dir.join(APP_NAME).join(CONFIG_FILE),
            None => PathBuf::from(CONFIG_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "min_word_length": 4, "deck_pattern": "Español*" }"#).unwrap();

        let config = AnalyzerConfig::load(&path).unwrap();
        assert_eq!(config.min_word_length, 4);
        assert_eq!(config.deck_pattern, "Español*");
        assert_eq!(config.field_names, vec!["FrontText", "BackText"]);
        assert_eq!(config.frequency_decimal_places, 2);
    }

    #[test]
    fn malformed_or_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();

        assert_eq!(AnalyzerConfig::load_or_default(&broken), AnalyzerConfig::default());
        assert_eq!(
            AnalyzerConfig::load_or_default(&dir.path().join("absent.json")),
            AnalyzerConfig::default()
        );
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AnalyzerConfig { report_sheet_name: "Vocab".to_string(), ..Default::default() };

        config.save(&path).unwrap();
        assert_eq!(AnalyzerConfig::load(&path).unwrap(), config);
    }
}
