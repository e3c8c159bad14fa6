//! Project creation form session.

use crate::{Notification, Notifier, ProjectGateway, messages};

use folio_core::{CreateProjectPayload, FilePart, ImageFile, ProjectDraft, ProjectField};

use log::{debug, warn};
use uuid::Uuid;

/// Scheme of session-local image preview references
pub const PREVIEW_SCHEME: &str = "blob:folio/";

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The backend accepted the project and the form was reset
    Created,
    /// Required text fields are blank; nothing was sent. The image may be
    /// missing as well, which is notified separately.
    MissingFields(Vec<ProjectField>),
    /// No image was selected; nothing was sent
    MissingImage,
    /// The request was sent and failed; the draft is kept
    Failed,
}

/// A single creation form session.
///
/// Owns its draft and image selection exclusively. Submitting takes
/// `&mut self`, so a session never has two requests in flight.
#[derive(Debug, Clone)]
pub struct CreateForm {
    draft: ProjectDraft,
    image: Option<ImageFile>,
}

impl Default for CreateForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateForm {
    pub fn new() -> Self {
        Self {
            draft: ProjectDraft::blank(),
            image: None,
        }
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn image(&self) -> Option<&ImageFile> {
        self.image.as_ref()
    }

    pub fn set_field<S: Into<String>>(&mut self, field: ProjectField, value: S) {
        self.draft.set(field, value);
    }

    /// Replace the image selection with the first of `files`.
    ///
    /// A non-empty selection gets a fresh preview reference that is only
    /// meaningful inside this session. An empty selection clears the image
    /// but leaves the previous preview reference in place.
    pub fn select_images(&mut self, files: Vec<ImageFile>) {
        self.image = files.into_iter().next();

        if self.image.is_some() {
            self.draft.image_url = format!("{}{}", PREVIEW_SCHEME, Uuid::new_v4());
        }
    }

    /// Discard the draft and selection, starting over with a new date.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Validate locally, then send one creation request.
    pub async fn submit<G, N>(&mut self, gateway: &G, notifier: &N) -> CreateOutcome
    where
        G: ProjectGateway + ?Sized,
        N: Notifier + ?Sized,
    {
        let missing = self.draft.blank_required_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
            notifier.notify(Notification::error(format!(
                "{}: {}",
                messages::MISSING_FIELDS,
                names.join(", ")
            )));
        }

        // A missing image is reported even when text fields are blank too.
        let Some(ref image) = self.image else {
            notifier.notify(Notification::error(messages::MISSING_IMAGE));
            return if missing.is_empty() {
                CreateOutcome::MissingImage
            } else {
                CreateOutcome::MissingFields(missing)
            };
        };

        if !missing.is_empty() {
            return CreateOutcome::MissingFields(missing);
        }

        let payload = CreateProjectPayload {
            fields: self.draft.fields(),
            image: FilePart::package(image),
        };

        debug!(
            "Creating project {:?} with image {} ({} bytes)",
            payload.fields.title,
            payload.image.file_name,
            payload.image.content.len()
        );

        match gateway.create_project(payload).await {
            Ok(()) => {
                self.reset();
                notifier.notify(Notification::success(messages::CREATE_SUCCESS));
                CreateOutcome::Created
            }
            Err(e) => {
                warn!("Project creation failed: {}", e);
                notifier.notify(Notification::error(messages::CREATE_FAILURE));
                CreateOutcome::Failed
            }
        }
    }
}
