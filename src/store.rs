use std::fs;

use serde::{Serialize, Deserialize};

use crate::model::{CompetitorEntry, OperationalInputs};

const STATE_FILE: &str = "analyzer_state.json";

/// Everything that survives between sessions: the competitor list and the
/// last submitted form values. Missing or unreadable files fall back to the
/// empty default; there is no format versioning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedState {
    pub competitors: Vec<CompetitorEntry>,
    pub last_inputs: OperationalInputs,
}

pub fn load() -> SavedState {
    match fs::read_to_string(STATE_FILE) {
        Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
        Err(_) => SavedState::default(),
    }
}

pub fn save(state: &SavedState) {
    match serde_json::to_string_pretty(state) {
        Ok(json) => {
            if let Err(e) = fs::write(STATE_FILE, json) {
                log::warn!("failed to write {STATE_FILE}: {e}");
            }
        }
        Err(e) => log::warn!("failed to serialize state: {e}"),
    }
}
