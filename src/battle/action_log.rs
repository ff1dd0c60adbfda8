use rocket_okapi::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// An accepted battle action as recorded in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde", tag = "type")]
pub enum ActionPayload {
    StartBattle { boss_id: String },
    Answer { selected_index: usize, correct: bool },
    PlayAgain,
    LeaveBattle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct ActionEntry {
    pub seq: u64,
    pub action_type: String,
    pub payload: ActionPayload,
    /// Milliseconds since the Unix epoch.
    pub timestamp: String,
}

/// Append-only, in-memory action log. Sequence numbers start at 1.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    entries: Vec<ActionEntry>,
    seq: u64,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, action_type: &str, payload: ActionPayload) -> ActionEntry {
        self.seq += 1;
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0)
            .to_string();
        let entry = ActionEntry {
            seq: self.seq,
            action_type: action_type.to_string(),
            payload,
            timestamp,
        };
        self.entries.push(entry.clone());
        entry
    }

    pub fn entries(&self) -> &[ActionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
