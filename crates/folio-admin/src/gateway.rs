use crate::GatewayResult;

use folio_core::{CreateProjectPayload, Project, UpdateProjectPayload};

use async_trait::async_trait;

/// Remote store that owns project records and their images.
///
/// Every call is a single request; implementations never retry.
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    /// Fetch a project. `Ok(None)` when the backend has no such record.
    async fn fetch_project(&self, id: &str) -> GatewayResult<Option<Project>>;

    /// Create a project from text fields plus its image.
    async fn create_project(&self, payload: CreateProjectPayload) -> GatewayResult<()>;

    /// Replace the text fields of a project, and its image when one is given.
    async fn update_project(&self, id: &str, payload: UpdateProjectPayload) -> GatewayResult<()>;
}
