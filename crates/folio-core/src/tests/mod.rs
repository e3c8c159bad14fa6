mod image_file;

use crate::Project;

use chrono::{TimeZone, Utc};

/// A stored project with every field populated
pub(crate) fn sample_project() -> Project {
    Project {
        id: "65f1c0de0012ab34cd56".to_string(),
        title: "Weather Station".to_string(),
        subtitle: "Embedded sensor dashboard".to_string(),
        description: "Collects readings and charts them.".to_string(),
        image_url: "https://cdn.example.com/weather.png".to_string(),
        github_url: "https://github.com/example/weather".to_string(),
        live_url: "https://weather.example.com".to_string(),
        date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        created_at: None,
    }
}
