//! folio-admin
//!
//! Admin-side workflow for portfolio projects: the gateway to the remote
//! backend and the create/edit form sessions built on top of it.

pub(crate) mod create_form;
pub(crate) mod edit_form;
pub(crate) mod error;
pub(crate) mod fetch_state;
pub(crate) mod gateway;
pub(crate) mod http_gateway;
pub(crate) mod notification;
pub(crate) mod schema;

#[cfg(test)]
mod tests;

pub use create_form::{CreateForm, CreateOutcome, PREVIEW_SCHEME};
pub use edit_form::{EditForm, EditOutcome, EditPresentation, EditSession, SubmitIndicator};
pub use error::{GatewayError, Result as GatewayResult};
pub use fetch_state::FetchState;
pub use gateway::ProjectGateway;
pub use http_gateway::{HttpGateway, PROJECTS_PATH};
pub use notification::{LogNotifier, Notification, NotificationLevel, Notifier, messages};
pub use schema::project_schema;
