use tokio::sync::RwLock;

use crate::database::seed;
use crate::error::ActivityError;
use crate::models::{Activity, ActivityListing};

/// In-memory activity directory, owned by the server and handed to each
/// request through router state.
///
/// Every roster change runs under the write guard, so the membership check
/// and the append/remove that follows it cannot interleave with another
/// request for the same activity.
#[derive(Debug, Default)]
pub struct ActivityDirectory {
    entries: RwLock<Vec<(String, Activity)>>,
}

impl ActivityDirectory {
    /// Builds a directory from `(name, activity)` pairs. Later entries with a
    /// name already seen are dropped.
    pub fn new(entries: impl IntoIterator<Item = (String, Activity)>) -> Self {
        let mut unique: Vec<(String, Activity)> = Vec::new();
        for (name, activity) in entries {
            if unique.iter().any(|(existing, _)| *existing == name) {
                continue;
            }
            unique.push((name, activity));
        }
        Self {
            entries: RwLock::new(unique),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub async fn list(&self) -> ActivityListing {
        let entries = self.entries.read().await;
        ActivityListing {
            entries: entries.clone(),
        }
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity.clone())
    }

    pub async fn add_participant(&self, name: &str, email: &str) -> Result<(), ActivityError> {
        let mut entries = self.entries.write().await;
        let activity = find_mut(&mut entries, name)?;
        if activity.is_registered(email) {
            return Err(ActivityError::AlreadySignedUp);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    pub async fn remove_participant(&self, name: &str, email: &str) -> Result<(), ActivityError> {
        let mut entries = self.entries.write().await;
        let activity = find_mut(&mut entries, name)?;
        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(ActivityError::NotRegistered);
        };
        activity.participants.remove(pos);
        Ok(())
    }
}

fn find_mut<'a>(
    entries: &'a mut [(String, Activity)],
    name: &str,
) -> Result<&'a mut Activity, ActivityError> {
    entries
        .iter_mut()
        .find(|(n, _)| n == name)
        .map(|(_, activity)| activity)
        .ok_or(ActivityError::NotFound)
}
