use serde::{Deserialize, Serialize};

/// One extracurricular activity as returned by `GET /activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl ActivityRecord {
    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    // Capacity is advisory; an overbooked activity reports zero.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Seed-file shape: the record plus the name it is keyed under.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl SeedActivity {
    pub fn into_entry(self) -> (String, ActivityRecord) {
        (
            self.name,
            ActivityRecord {
                description: self.description,
                schedule: self.schedule,
                max_participants: self.max_participants,
                participants: self.participants,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(max: u32, participants: &[&str]) -> ActivityRecord {
        ActivityRecord {
            description: "d".to_string(),
            schedule: "s".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn spots_left_is_capacity_minus_roster() {
        assert_eq!(record(18, &["a@x", "b@x"]).spots_left(), 16);
    }

    #[test]
    fn spots_left_saturates_when_overbooked() {
        assert_eq!(record(1, &["a@x", "b@x"]).spots_left(), 0);
    }

    #[test]
    fn membership_is_exact_match() {
        let r = record(5, &["a@x"]);
        assert!(r.is_signed_up("a@x"));
        assert!(!r.is_signed_up("A@x"));
    }
}
