//! Project edit session: fetch, then a validated form over the fetched values.

use crate::{FetchState, Notification, Notifier, ProjectGateway, messages};

use folio_core::{
    FieldErrors, FilePart, ImageFile, Project, ProjectDraft, ProjectField, ProjectSchema,
    UpdateProjectPayload,
};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};

/// What the edit page shows. Only `Form` exposes editable fields.
#[derive(Debug)]
pub enum EditPresentation<'a> {
    Loading,
    FetchError,
    NotFound,
    Form(&'a EditForm),
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The backend accepted the update and the form was cleared
    Updated,
    /// Schema violations; nothing was sent. Messages are on the form.
    Invalid,
    /// The request was sent and failed; the draft is kept
    Failed,
}

/// Edit session for one project identifier.
#[derive(Debug)]
pub struct EditSession {
    id: String,
    schema: ProjectSchema,
    state: FetchState<Project>,
    form: Option<EditForm>,
}

impl EditSession {
    /// Start a session in the loading state.
    pub fn new<S: Into<String>>(id: S, schema: ProjectSchema) -> Self {
        Self {
            id: id.into(),
            schema,
            state: FetchState::Loading,
            form: None,
        }
    }

    /// Fetch the project and mount the form if it exists.
    pub async fn load<G>(&mut self, gateway: &G)
    where
        G: ProjectGateway + ?Sized,
    {
        let state = FetchState::fetch(gateway, &self.id).await;
        self.resolve(state);
    }

    /// Settle the session on a fetch result.
    pub fn resolve(&mut self, state: FetchState<Project>) {
        self.form = match state {
            FetchState::Loaded(Some(ref project)) => Some(EditForm::new(
                self.id.clone(),
                project,
                self.schema.clone(),
            )),
            _ => None,
        };
        self.state = state;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &FetchState<Project> {
        &self.state
    }

    pub fn presentation(&self) -> EditPresentation<'_> {
        match (&self.state, &self.form) {
            (FetchState::Loading, _) => EditPresentation::Loading,
            (FetchState::Error(_), _) => EditPresentation::FetchError,
            (FetchState::Loaded(None), _) => EditPresentation::NotFound,
            (FetchState::Loaded(Some(_)), Some(form)) => EditPresentation::Form(form),
            (FetchState::Loaded(Some(_)), None) => EditPresentation::NotFound,
        }
    }

    pub fn form(&self) -> Option<&EditForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut EditForm> {
        self.form.as_mut()
    }
}

/// Shared view of whether an update request is in flight.
///
/// Readable while `EditForm::submit` holds the form mutably, e.g. by a
/// caller rendering a spinner.
#[derive(Debug, Clone, Default)]
pub struct SubmitIndicator(Arc<AtomicBool>);

impl SubmitIndicator {
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Raises the indicator and lowers it when dropped, including when the
/// submit future is abandoned mid-request.
struct SubmitGuard(Arc<AtomicBool>);

impl SubmitGuard {
    fn raise(indicator: &SubmitIndicator) -> Self {
        indicator.0.store(true, Ordering::SeqCst);
        Self(Arc::clone(&indicator.0))
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Validated form pre-filled from a stored project.
#[derive(Debug)]
pub struct EditForm {
    id: String,
    schema: ProjectSchema,
    draft: ProjectDraft,
    image: Option<ImageFile>,
    errors: FieldErrors,
    submitting: SubmitIndicator,
}

impl EditForm {
    pub fn new(id: String, project: &Project, schema: ProjectSchema) -> Self {
        Self {
            id,
            schema,
            draft: ProjectDraft::from_project(project),
            image: None,
            errors: FieldErrors::new(),
            submitting: SubmitIndicator::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn image(&self) -> Option<&ImageFile> {
        self.image.as_ref()
    }

    /// Inline validation messages from the last submission attempt
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_active()
    }

    /// Handle that keeps reporting the in-flight state during `submit`
    pub fn submit_indicator(&self) -> SubmitIndicator {
        self.submitting.clone()
    }

    pub fn set_field<S: Into<String>>(&mut self, field: ProjectField, value: S) {
        self.draft.set(field, value);
    }

    /// Replace the new-image selection with the first of `files`.
    pub fn select_images(&mut self, files: Vec<ImageFile>) {
        self.image = files.into_iter().next();
    }

    /// Clear every field and the selection.
    pub fn reset(&mut self) {
        self.draft = ProjectDraft::default();
        self.image = None;
        self.errors.clear();
    }

    /// Validate, then send one update request.
    ///
    /// Without a newly selected image the payload carries no image at all and
    /// the stored one is left alone.
    pub async fn submit<G, N>(&mut self, gateway: &G, notifier: &N) -> EditOutcome
    where
        G: ProjectGateway + ?Sized,
        N: Notifier + ?Sized,
    {
        if let Err(errors) = self.schema.validate(&self.draft, self.image.as_ref()) {
            debug!("Edit of {} blocked: {}", self.id, errors);
            self.errors = errors;
            return EditOutcome::Invalid;
        }
        self.errors.clear();

        let payload = UpdateProjectPayload {
            fields: self.draft.fields(),
            image: self.image.as_ref().map(FilePart::package),
        };

        let result = {
            let _guard = SubmitGuard::raise(&self.submitting);
            gateway.update_project(&self.id, payload).await
        };

        match result {
            Ok(()) => {
                self.reset();
                notifier.notify(Notification::success(messages::EDIT_SUCCESS));
                EditOutcome::Updated
            }
            Err(e) => {
                warn!("Update of project {} failed: {}", self.id, e);
                notifier.notify(Notification::error(messages::EDIT_FAILURE));
                EditOutcome::Failed
            }
        }
    }
}
