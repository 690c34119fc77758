use tracing::{info, warn};

use crate::database::ActivityDirectory;
use crate::error::ActivityError;
use crate::models::ActivityListing;

pub async fn list_activities(directory: &ActivityDirectory) -> ActivityListing {
    directory.list().await
}

/// Adds `email` to the roster of `activity_name` and returns the
/// confirmation shown to the student.
pub async fn sign_up(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    match directory.add_participant(activity_name, email).await {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "signed up");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            Err(e)
        }
    }
}

pub async fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    match directory.remove_participant(activity_name, email).await {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "unregistered");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "unregister rejected: {}", e);
            Err(e)
        }
    }
}
