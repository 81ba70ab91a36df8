use crate::core::TodoState;
use crate::error::Result;
use crate::models::Task;
use crate::storage::Storage;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Storage slot holding the serialized collection
pub const STORAGE_KEY: &str = "todos";

/// Current envelope version
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    version: u32,
    next_id: i64,
    tasks: Vec<Task>,
}

/// Either the versioned envelope or the bare array written by older builds
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Stored {
    Envelope(Envelope),
    Legacy(Vec<Task>),
}

/// Reads and writes the task collection under a fixed key
pub struct Persistence<S: Storage> {
    storage: S,
}

impl<S: Storage> Persistence<S> {
    pub fn new(storage: S) -> Self {
        Persistence { storage }
    }

    /// Write the full collection
    pub fn save(&self, state: &TodoState) -> Result<()> {
        let envelope = Envelope {
            version: FORMAT_VERSION,
            next_id: state.next_id(),
            tasks: state.tasks().to_vec(),
        };
        let json = serde_json::to_string(&envelope)?;
        self.storage.set(STORAGE_KEY, &json)?;
        debug!(tasks = state.len(), "saved tasks");
        Ok(())
    }

    /// Load the saved collection. Missing or unreadable data yields an
    /// empty state.
    pub fn load(&self) -> TodoState {
        let raw = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => return TodoState::default(),
            Err(e) => {
                warn!(error = %e, "could not read saved tasks, starting empty");
                return TodoState::default();
            }
        };

        match decode(&raw) {
            Some(state) => {
                debug!(tasks = state.len(), "loaded tasks");
                state
            }
            None => TodoState::default(),
        }
    }
}

fn decode(raw: &str) -> Option<TodoState> {
    match serde_json::from_str::<Stored>(raw) {
        Ok(Stored::Envelope(envelope)) if envelope.version == FORMAT_VERSION => {
            rebuild(envelope.tasks, envelope.next_id)
        }
        Ok(Stored::Envelope(envelope)) => {
            warn!(
                version = envelope.version,
                "unsupported saved data version, starting empty"
            );
            None
        }
        Ok(Stored::Legacy(tasks)) => {
            debug!("migrating legacy task array");
            rebuild(tasks, 0)
        }
        Err(e) => {
            warn!(error = %e, "saved tasks are malformed, starting empty");
            None
        }
    }
}

fn rebuild(tasks: Vec<Task>, next_id: i64) -> Option<TodoState> {
    let state = TodoState::from_parts(tasks, next_id);
    if state.is_none() {
        warn!("saved task ids are out of range, starting empty");
    }
    state
}
