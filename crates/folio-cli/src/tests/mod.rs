mod cli;

use folio_admin::{GatewayError, GatewayResult, Notification, Notifier, ProjectGateway};
use folio_core::{CreateProjectPayload, Project, UpdateProjectPayload};

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

pub(crate) const PROJECT_ID: &str = "65f1c0de0012ab34cd56";

pub(crate) fn sample_project() -> Project {
    Project {
        id: PROJECT_ID.to_string(),
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

/// In-memory gateway holding at most one project
pub(crate) struct StubGateway {
    pub project: Option<Project>,
    pub reject_writes: bool,
    pub creates: Mutex<Vec<CreateProjectPayload>>,
    pub updates: Mutex<Vec<(String, UpdateProjectPayload)>>,
}

impl StubGateway {
    pub fn with_project() -> Self {
        Self {
            project: Some(sample_project()),
            reject_writes: false,
            creates: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self {
            project: None,
            ..Self::with_project()
        }
    }
}

#[async_trait]
impl ProjectGateway for StubGateway {
    async fn fetch_project(&self, id: &str) -> GatewayResult<Option<Project>> {
        Ok(self.project.clone().filter(|p| p.id == id))
    }

    async fn create_project(&self, payload: CreateProjectPayload) -> GatewayResult<()> {
        if self.reject_writes {
            return Err(GatewayError::api_error(
                400,
                "BAD_UPLOAD".to_string(),
                "rejected".to_string(),
            ));
        }
        self.creates.lock().unwrap().push(payload);
        Ok(())
    }

    async fn update_project(&self, id: &str, payload: UpdateProjectPayload) -> GatewayResult<()> {
        if self.reject_writes {
            return Err(GatewayError::api_error(
                500,
                "STORAGE_ERROR".to_string(),
                "rejected".to_string(),
            ));
        }
        self.updates.lock().unwrap().push((id.to_string(), payload));
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct SilentNotifier {
    pub shown: Mutex<Vec<Notification>>,
}

impl Notifier for SilentNotifier {
    fn notify(&self, notification: Notification) {
        self.shown.lock().unwrap().push(notification);
    }
}
