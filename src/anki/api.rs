use std::{
    collections::HashMap,
    time::Duration,
};

use log::{
    debug,
    warn,
};
use reqwest::blocking::Client;
use serde::{
    Deserialize,
    Serialize,
};

use super::{
    FlashcardProvider,
    NoteId,
    NoteText,
};
use crate::core::LexError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Field {
    pub value: String,
    pub order: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    pub fields: HashMap<String, Field>,
    pub model_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self, action: &str) -> Result<T, LexError> {
        match (self.result, self.error) {
            (_, Some(error)) => {
                Err(LexError::ProviderUnavailable(format!("AnkiConnect {}: {}", action, error)))
            }
            (Some(result), None) => Ok(result),
            (None, None) => {
                Err(LexError::ProviderUnavailable(format!("AnkiConnect {}: empty result", action)))
            }
        }
    }
}

/// Synchronous AnkiConnect client.
pub struct AnkiConnect {
    client: Client,
    url: String,
}

impl AnkiConnect {
    pub fn new(url: impl Into<String>) -> Result<Self, LexError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { client, url: url.into() })
    }

    fn make_request<T: for<'de> Deserialize<'de>>(
        &self,
        action: &str,
        params: Option<serde_json::Value>,
    ) -> Result<T, LexError> {
        let mut body = serde_json::Map::new();
        body.insert("action".to_string(), serde_json::Value::String(action.to_string()));
        body.insert("version".to_string(), serde_json::Value::Number(6.into()));

        if let Some(params) = params {
            body.insert("params".to_string(), params);
        }

        debug!("AnkiConnect request: {}", action);
        let response: ApiResponse<T> = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json::<ApiResponse<T>>())
            .map_err(|e| {
                LexError::ProviderUnavailable(format!("{} request failed: {}", action, e))
            })?;
        response.into_result(action)
    }

    pub fn version(&self) -> Result<u32, LexError> {
        self.make_request("version", None)
    }

    pub fn find_notes(&self, query: &str) -> Result<Vec<u64>, LexError> {
        self.make_request("findNotes", Some(serde_json::json!({ "query": query })))
    }

    pub fn notes_info(&self, note_ids: &[u64]) -> Result<Vec<Note>, LexError> {
        self.make_request("notesInfo", Some(serde_json::json!({ "notes": note_ids })))
    }
}

pub fn deck_query(pattern: &str) -> String {
    if pattern.contains(' ') || pattern.contains(':') || pattern.contains('"') {
        format!("deck:\"{}\"", pattern.replace('"', "\\\""))
    } else {
        format!("deck:{}", pattern)
    }
}

/// Field values named in `field_names`, in the note's own field order.
pub fn select_fields(note: &Note, field_names: &[String]) -> Vec<String> {
    let mut selected: Vec<(&String, &Field)> =
        note.fields.iter().filter(|(name, _)| field_names.contains(name)).collect();
    selected.sort_by_key(|(_, field)| field.order);
    selected.into_iter().map(|(_, field)| field.value.clone()).collect()
}

impl FlashcardProvider for AnkiConnect {
    fn is_connected(&self) -> bool {
        match self.version() {
            Ok(version) => {
                debug!("AnkiConnect is online. Version: {}", version);
                true
            }
            Err(e) => {
                warn!("AnkiConnect is not reachable at {}: {}", self.url, e);
                false
            }
        }
    }

    fn find_note_ids_by_deck_pattern(&self, pattern: &str) -> Result<Vec<NoteId>, LexError> {
        self.find_notes(&deck_query(pattern))
    }

    fn extract_field_text(
        &self,
        note_ids: &[NoteId],
        field_names: &[String],
    ) -> Result<Vec<NoteText>, LexError> {
        Ok(self
            .notes_info(note_ids)?
            .into_iter()
            .map(|note| NoteText { note_id: note.note_id, texts: select_fields(&note, field_names) })
            .collect())
    }
}
