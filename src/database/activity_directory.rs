use parking_lot::RwLock;

use crate::database::seed::Seed;
use crate::error::{DirectoryError, Result};

/// In-memory registry of activities keyed by name.
///
/// Every mutation takes the write lock for the whole check-and-mutate step,
/// so the existence and uniqueness checks cannot interleave with another
/// request touching the same roster.
#[derive(Debug)]
pub struct ActivityDirectory {
    seed: Seed,
    activities: RwLock<Seed>,
}

impl ActivityDirectory {
    pub fn new(seed: Seed) -> Self {
        Self {
            activities: RwLock::new(seed.clone()),
            seed,
        }
    }

    /// Point-in-time copy of all activities in seed order.
    pub fn snapshot(&self) -> Seed {
        self.activities.read().clone()
    }

    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.read().is_empty()
    }

    pub fn enroll(&self, activity: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write();
        let record = activities
            .get_mut(activity)
            .ok_or_else(|| DirectoryError::NotFound {
                activity: activity.to_string(),
            })?;

        if record.is_signed_up(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        record.participants.push(email.to_string());
        Ok(())
    }

    pub fn withdraw(&self, activity: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write();
        let record = activities
            .get_mut(activity)
            .ok_or_else(|| DirectoryError::NotFound {
                activity: activity.to_string(),
            })?;

        let Some(pos) = record.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotSignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        };

        // Vec::remove keeps the remaining roster in signup order.
        record.participants.remove(pos);
        Ok(())
    }

    /// Drops every enrollment change and restores the startup seed.
    pub fn reseed(&self) {
        *self.activities.write() = self.seed.clone();
    }
}
