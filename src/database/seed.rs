use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::SeedError;
use crate::models::{ActivityRecord, SeedActivity};

pub type Seed = IndexMap<String, ActivityRecord>;

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    activities: Vec<SeedActivity>,
}

// (name, description, schedule, max_participants, participants)
const DEFAULT_ACTIVITIES: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Soccer Team",
        "Join the school soccer team and compete in local leagues",
        "Wednesdays and Fridays, 4:00 PM - 5:30 PM",
        18,
        &["lucas@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Basketball Club",
        "Practice basketball skills and play friendly matches",
        "Mondays and Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["liam@mergington.edu", "ava@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct, and produce school plays and performances",
        "Tuesdays, 4:00 PM - 5:30 PM",
        25,
        &["noah@mergington.edu", "isabella@mergington.edu"],
    ),
    (
        "Art Workshop",
        "Explore painting, drawing, and sculpture techniques",
        "Fridays, 3:30 PM - 5:00 PM",
        20,
        &["amelia@mergington.edu", "benjamin@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Wednesdays, 3:30 PM - 5:00 PM",
        10,
        &["charlotte@mergington.edu", "jackson@mergington.edu"],
    ),
    (
        "Math Olympiad",
        "Prepare for math competitions and solve challenging problems",
        "Mondays, 4:00 PM - 5:00 PM",
        12,
        &["henry@mergington.edu", "grace@mergington.edu"],
    ),
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
];

/// The built-in Mergington High School activity list.
pub fn default_seed() -> Seed {
    DEFAULT_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                ActivityRecord {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants: *max,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}

pub fn load_seed_file(path: &Path) -> Result<Seed, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: SeedFile = toml::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    build_seed(file.activities)
}

/// Validates seed entries and keys them by name, keeping file order.
pub fn build_seed(activities: Vec<SeedActivity>) -> Result<Seed, SeedError> {
    if activities.is_empty() {
        return Err(invalid("no activities defined"));
    }

    let mut seed = Seed::with_capacity(activities.len());
    for activity in activities {
        if activity.name.trim().is_empty() {
            return Err(invalid("activity name must not be empty"));
        }
        if activity.max_participants == 0 {
            return Err(invalid(format!(
                "{}: max_participants must be positive",
                activity.name
            )));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = activity.participants.iter().find(|p| !seen.insert(p.as_str())) {
            return Err(invalid(format!(
                "{}: duplicate participant {}",
                activity.name, dup
            )));
        }

        let (name, record) = activity.into_entry();
        if seed.contains_key(&name) {
            return Err(invalid(format!("duplicate activity {}", name)));
        }
        seed.insert(name, record);
    }
    Ok(seed)
}

fn invalid(message: impl Into<String>) -> SeedError {
    SeedError::Invalid {
        message: message.into(),
    }
}
