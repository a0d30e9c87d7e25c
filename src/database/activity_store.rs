use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{ActivityError, Result};
use crate::models::{ActivityDirectory, ActivityRecord};

/// In-memory activity directory shared by all handlers.
///
/// Cloning is cheap and every clone sees the same directory. Mutations hold the
/// write lock across the membership check and the change, so concurrent signups
/// for the same email cannot both succeed.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityDirectory>>,
}

impl ActivityStore {
    pub fn new(directory: ActivityDirectory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }

    pub async fn list_activities(&self) -> ActivityDirectory {
        self.inner.read().await.clone()
    }

    pub async fn load_activity(&self, activity_name: &str) -> Option<ActivityRecord> {
        self.inner.read().await.get(activity_name).cloned()
    }

    pub async fn count_activities(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Appends `email` to the roster and returns the updated record.
    pub async fn insert_participant(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<ActivityRecord> {
        let mut directory = self.inner.write().await;
        let record = directory
            .get_mut(activity_name)
            .ok_or_else(|| ActivityError::not_found(activity_name))?;

        if record.has_participant(email) {
            return Err(ActivityError::AlreadySignedUp {
                email: email.to_string(),
            });
        }

        record.participants.push(email.to_string());
        Ok(record.clone())
    }

    /// Removes `email` from the roster and returns the updated record.
    pub async fn remove_participant(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<ActivityRecord> {
        let mut directory = self.inner.write().await;
        let record = directory
            .get_mut(activity_name)
            .ok_or_else(|| ActivityError::not_found(activity_name))?;

        let Some(pos) = record.participants.iter().position(|p| p == email) else {
            return Err(ActivityError::NotSignedUp {
                email: email.to_string(),
            });
        };

        // `remove` keeps the remaining signup order intact.
        record.participants.remove(pos);
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ActivityStore {
        let mut directory = ActivityDirectory::new();
        directory.insert(
            "Chess Club".to_string(),
            ActivityRecord::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        );
        ActivityStore::new(directory)
    }

    #[tokio::test]
    async fn test_insert_appends_in_order() {
        let store = store();
        let record = store
            .insert_participant("Chess Club", "new@mergington.edu")
            .await
            .unwrap();
        assert_eq!(
            record.participants,
            vec![
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "new@mergington.edu"
            ]
        );
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate() {
        let store = store();
        let err = store
            .insert_participant("Chess Club", "michael@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, ActivityError::AlreadySignedUp { .. }));
        let record = store.load_activity("Chess Club").await.unwrap();
        assert_eq!(record.participants.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_activity() {
        let store = store();
        assert!(matches!(
            store.insert_participant("Nope", "a@mergington.edu").await,
            Err(ActivityError::NotFound { .. })
        ));
        assert!(matches!(
            store.remove_participant("Nope", "a@mergington.edu").await,
            Err(ActivityError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_remove_keeps_remaining_order() {
        let store = store();
        store
            .insert_participant("Chess Club", "late@mergington.edu")
            .await
            .unwrap();
        let record = store
            .remove_participant("Chess Club", "daniel@mergington.edu")
            .await
            .unwrap();
        assert_eq!(
            record.participants,
            vec!["michael@mergington.edu", "late@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn test_remove_absent_participant() {
        let store = store();
        let err = store
            .remove_participant("Chess Club", "ghost@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, ActivityError::NotSignedUp { .. }));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = store();
        let other = store.clone();
        other
            .insert_participant("Chess Club", "shared@mergington.edu")
            .await
            .unwrap();
        assert!(store
            .load_activity("Chess Club")
            .await
            .unwrap()
            .has_participant("shared@mergington.edu"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicate_signups_admit_one() {
        let store = store();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .insert_participant("Chess Club", "race@mergington.edu")
                    .await
                    .is_ok()
            }));
        }

        let mut admitted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                admitted += 1;
            }
        }
        assert_eq!(admitted, 1);

        let record = store.load_activity("Chess Club").await.unwrap();
        let count = record
            .participants
            .iter()
            .filter(|p| p.as_str() == "race@mergington.edu")
            .count();
        assert_eq!(count, 1);
    }
}
