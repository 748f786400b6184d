//! In-memory incident store -- bounded append log plus keyed audio cache.
//!
//! Everything here lives for the process lifetime only; durability is an
//! explicit non-goal. The store is created at startup and handed to the
//! pipeline and API as a shared handle, never reached through globals.

use crate::analyze::{Alert, Analysis};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Retention cap for the incident log.
pub const LOG_CAP: usize = 50;

/// Capacity of the audio cache. The upstream design left this unbounded;
/// a cap with oldest-first eviction keeps memory bounded without changing
/// success-path behavior.
pub const AUDIO_CAP: usize = 50;

/// One processed incident: the alert as received plus the analysis
/// derived from it. Never mutated after insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub timestamp: DateTime<Utc>,
    pub alert: Alert,
    pub analysis: Analysis,
}

/// Bounded incident log and per-incident audio cache.
pub struct IncidentStore {
    log: Mutex<VecDeque<IncidentRecord>>,
    audio: Mutex<AudioCache>,
}

struct AudioCache {
    blobs: HashMap<String, Bytes>,
    // Insertion order, oldest at the front. Drives eviction.
    order: VecDeque<String>,
}

impl IncidentStore {
    pub fn new() -> Self {
        Self {
            log: Mutex::new(VecDeque::with_capacity(LOG_CAP + 1)),
            audio: Mutex::new(AudioCache {
                blobs: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// Append a record, dropping the oldest once past [`LOG_CAP`].
    pub fn append(&self, record: IncidentRecord) {
        let mut log = self.log.lock().expect("incident log mutex poisoned");
        log.push_back(record);
        while log.len() > LOG_CAP {
            log.pop_front();
        }
    }

    /// The up-to-[`LOG_CAP`] most recent records, oldest first.
    pub fn recent_window(&self) -> Vec<IncidentRecord> {
        let log = self.log.lock().expect("incident log mutex poisoned");
        log.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.log.lock().expect("incident log mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store synthesized audio for an incident. Re-storing under the same
    /// id replaces the blob without consuming extra capacity.
    pub fn put_audio(&self, incident_id: &str, blob: Bytes) {
        let mut audio = self.audio.lock().expect("audio cache mutex poisoned");
        if audio.blobs.insert(incident_id.to_string(), blob).is_none() {
            audio.order.push_back(incident_id.to_string());
        }
        while audio.order.len() > AUDIO_CAP {
            if let Some(evicted) = audio.order.pop_front() {
                audio.blobs.remove(&evicted);
                tracing::debug!(incident_id = %evicted, "evicted audio blob");
            }
        }
    }

    /// Fetch audio for an incident, if any was ever synthesized and is
    /// still resident. `Bytes` clones are cheap refcount bumps.
    pub fn get_audio(&self, incident_id: &str) -> Option<Bytes> {
        let audio = self.audio.lock().expect("audio cache mutex poisoned");
        audio.blobs.get(incident_id).cloned()
    }
}

impl Default for IncidentStore {
    fn default() -> Self {
        Self::new()
    }
}
