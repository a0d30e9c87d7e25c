use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::error::ConfigError;
use crate::models::{ActivityDirectory, ActivityRecord};

/// The directory every fresh process starts with.
pub fn default_activities() -> ActivityDirectory {
    let seed = [
        (
            "Chess Club",
            ActivityRecord::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            ActivityRecord::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            ActivityRecord::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team",
            ActivityRecord::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Basketball Club",
            ActivityRecord::new(
                "Practice basketball skills and play friendly games",
                "Wednesdays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Workshop",
            ActivityRecord::new(
                "Explore painting, drawing, and sculpture techniques",
                "Mondays, 3:30 PM - 5:00 PM",
                18,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            ActivityRecord::new(
                "Act, direct, and produce plays and performances",
                "Thursdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        ),
        (
            "Math Club",
            ActivityRecord::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            ActivityRecord::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ];

    seed.into_iter()
        .map(|(name, record)| (name.to_string(), record))
        .collect()
}

/// Reads a directory from a JSON file shaped like the `GET /activities` response.
pub fn load_seed_file(path: &Path) -> Result<ActivityDirectory, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    let directory: ActivityDirectory =
        serde_json::from_str(&raw).map_err(|source| ConfigError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;

    validate_directory(&directory)?;
    info!(
        path = %path.display(),
        activities = directory.len(),
        "loaded activity seed file"
    );
    Ok(directory)
}

fn validate_directory(directory: &ActivityDirectory) -> Result<(), ConfigError> {
    for (name, record) in directory {
        if name.trim().is_empty() {
            return Err(ConfigError::InvalidSeed {
                activity_name: name.clone(),
                reason: "activity name is empty".to_string(),
            });
        }
        if record.max_participants == 0 {
            return Err(ConfigError::InvalidSeed {
                activity_name: name.clone(),
                reason: "max_participants must be positive".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for email in &record.participants {
            if !seen.insert(email.as_str()) {
                return Err(ConfigError::InvalidSeed {
                    activity_name: name.clone(),
                    reason: format!("{} is listed twice", email),
                });
            }
        }
    }
    Ok(())
}
