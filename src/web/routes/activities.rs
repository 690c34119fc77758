use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::database::ActivityDirectory;
use crate::error::ActivityError;
use crate::models::ActivityListing;
use crate::services::activities_service;

#[derive(Debug, Deserialize)]
pub struct MembershipQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities_handler(
    State(directory): State<Arc<ActivityDirectory>>,
) -> Json<ActivityListing> {
    Json(activities_service::list_activities(&directory).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<MembershipQuery>,
    State(directory): State<Arc<ActivityDirectory>>,
) -> Result<Json<MessageResponse>, ActivityError> {
    let message = activities_service::sign_up(&directory, &activity_name, &query.email).await?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<MembershipQuery>,
    State(directory): State<Arc<ActivityDirectory>>,
) -> Result<Json<MessageResponse>, ActivityError> {
    let message =
        activities_service::unregister(&directory, &activity_name, &query.email).await?;
    Ok(Json(MessageResponse { message }))
}
