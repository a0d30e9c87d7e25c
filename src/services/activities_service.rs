use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::database::activity_store::ActivityStore;
use crate::error::{ActivityError, Result};
use crate::models::{ActivityDirectory, ActivityRecord};

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities(store: &ActivityStore) -> ActivityDirectory {
    store.list_activities().await
}

pub async fn get_activity(store: &ActivityStore, activity_name: &str) -> Result<ActivityRecord> {
    store
        .load_activity(activity_name)
        .await
        .ok_or_else(|| ActivityError::not_found(activity_name))
}

pub async fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse> {
    let record = store.insert_participant(activity_name, email).await?;

    info!(
        activity = %activity_name,
        email = %email,
        participants = record.participants.len(),
        "participant signed up"
    );
    if record.is_over_capacity() {
        // Capacity is advisory.
        warn!(
            activity = %activity_name,
            participants = record.participants.len(),
            max_participants = record.max_participants,
            "activity is over capacity"
        );
    }

    Ok(MessageResponse {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse> {
    let record = store.remove_participant(activity_name, email).await?;

    info!(
        activity = %activity_name,
        email = %email,
        participants = record.participants.len(),
        "participant unregistered"
    );

    Ok(MessageResponse {
        message: format!("Unregistered {} from {}", email, activity_name),
    })
}
