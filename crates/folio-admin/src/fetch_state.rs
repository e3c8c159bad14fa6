use crate::ProjectGateway;

use folio_core::Project;

use log::warn;

/// Outcome of loading a remote record.
///
/// Exactly three cases; callers match on it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Loading,
    /// The request failed; the message is for logs, not for display
    Error(String),
    /// The request completed; `None` when the record does not exist
    Loaded(Option<T>),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => data.as_ref(),
            _ => None,
        }
    }
}

impl FetchState<Project> {
    /// Fetch a project and settle into `Error` or `Loaded`.
    pub async fn fetch<G>(gateway: &G, id: &str) -> Self
    where
        G: ProjectGateway + ?Sized,
    {
        match gateway.fetch_project(id).await {
            Ok(project) => FetchState::Loaded(project),
            Err(e) => {
                warn!("Failed to fetch project {}: {}", id, e);
                FetchState::Error(e.to_string())
            }
        }
    }
}
