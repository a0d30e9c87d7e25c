use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use crate::database::activity_store::ActivityStore;
use crate::error::ActivityError;
use crate::models::{ActivityDirectory, ActivityRecord};
use crate::services::activities_service::{self, MessageResponse, SignupQuery};

pub async fn activities_handler(State(store): State<ActivityStore>) -> Json<ActivityDirectory> {
    Json(activities_service::list_activities(&store).await)
}

pub async fn activity_handler(
    Path(activity_name): Path<String>,
    State(store): State<ActivityStore>,
) -> Result<Json<ActivityRecord>, ActivityError> {
    activities_service::get_activity(&store, &activity_name)
        .await
        .map(Json)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageResponse>, ActivityError> {
    let Query(query) = query?;
    activities_service::signup(&store, &activity_name, &query.email)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::debug!(activity = %activity_name, error = %e, "signup rejected");
            e
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageResponse>, ActivityError> {
    let Query(query) = query?;
    activities_service::unregister(&store, &activity_name, &query.email)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::debug!(activity = %activity_name, error = %e, "unregister rejected");
            e
        })
}
