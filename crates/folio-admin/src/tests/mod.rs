mod fetch_state;

use crate::{GatewayError, GatewayResult, Notification, Notifier, ProjectGateway};

use folio_core::{CreateProjectPayload, ImageFile, Project, UpdateProjectPayload};

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

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

pub(crate) fn sample_image() -> ImageFile {
    ImageFile::new("cover.png", "image/png", vec![0x89, b'P', b'N', b'G', 1, 2, 3])
}

/// How the fake backend answers fetches
pub(crate) enum FetchBehavior {
    Found(Project),
    Missing,
    Fails,
}

/// In-memory gateway that records every call
pub(crate) struct RecordingGateway {
    fetch: FetchBehavior,
    fail_writes: bool,
    calls: AtomicUsize,
    pub(crate) creates: Mutex<Vec<CreateProjectPayload>>,
    pub(crate) updates: Mutex<Vec<(String, UpdateProjectPayload)>>,
}

impl RecordingGateway {
    pub(crate) fn new(fetch: FetchBehavior) -> Self {
        Self {
            fetch,
            fail_writes: false,
            calls: AtomicUsize::new(0),
            creates: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn accepting() -> Self {
        Self::new(FetchBehavior::Found(sample_project()))
    }

    pub(crate) fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::accepting()
        }
    }

    /// Total number of requests made, of any kind
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn write_result(&self) -> GatewayResult<()> {
        if self.fail_writes {
            Err(GatewayError::api_error(
                500,
                "INTERNAL_ERROR".to_string(),
                "storage unavailable".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProjectGateway for RecordingGateway {
    async fn fetch_project(&self, _id: &str) -> GatewayResult<Option<Project>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fetch {
            FetchBehavior::Found(ref project) => Ok(Some(project.clone())),
            FetchBehavior::Missing => Ok(None),
            FetchBehavior::Fails => Err(GatewayError::api_error(
                502,
                "HTTP_502".to_string(),
                "Bad Gateway".to_string(),
            )),
        }
    }

    async fn create_project(&self, payload: CreateProjectPayload) -> GatewayResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.creates.lock().unwrap().push(payload);
        self.write_result()
    }

    async fn update_project(&self, id: &str, payload: UpdateProjectPayload) -> GatewayResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.updates.lock().unwrap().push((id.to_string(), payload));
        self.write_result()
    }
}

/// Notifier that keeps everything it is shown
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub(crate) fn all(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}
