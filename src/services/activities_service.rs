use serde::Serialize;
use tracing::{info, warn};

use crate::database::seed::Seed;
use crate::database::ActivityDirectory;
use crate::error::Result;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub message: String,
}

pub fn list_activities(directory: &ActivityDirectory) -> Seed {
    directory.snapshot()
}

pub fn signup_for_activity(
    directory: &ActivityDirectory,
    activity: &str,
    email: &str,
) -> Result<MessageView> {
    match directory.enroll(activity, email) {
        Ok(()) => {
            info!(activity = %activity, email = %email, "signup_ok");
            Ok(MessageView {
                message: format!("Signed up {} for {}", email, activity),
            })
        }
        Err(e) => {
            warn!(activity = %activity, email = %email, error = %e, "signup_rejected");
            Err(e)
        }
    }
}

pub fn unregister_from_activity(
    directory: &ActivityDirectory,
    activity: &str,
    email: &str,
) -> Result<MessageView> {
    match directory.withdraw(activity, email) {
        Ok(()) => {
            info!(activity = %activity, email = %email, "unregister_ok");
            Ok(MessageView {
                message: format!("Unregistered {} from {}", email, activity),
            })
        }
        Err(e) => {
            warn!(activity = %activity, email = %email, error = %e, "unregister_rejected");
            Err(e)
        }
    }
}
