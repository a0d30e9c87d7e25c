use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One extracurricular activity as stored in the directory and served by `/activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String,
    // Advisory only; signups past capacity are accepted.
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityRecord {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_over_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }
}

/// Snapshot of the whole directory, keyed by activity name.
pub type ActivityDirectory = BTreeMap<String, ActivityRecord>;
