use crate::{GatewayError, GatewayResult, ProjectGateway};

use folio_config::ApiConfig;
use folio_core::{
    BLOB_FILE_PART, CreateProjectPayload, FILE_NAME_FIELD, FilePart, Project, ProjectFields,
    UpdateProjectPayload,
};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method, Response, StatusCode};
use serde_json::Value;

/// Admin API route for project records
pub const PROJECTS_PATH: &str = "/admin/api/projects";

/// Gateway speaking to the portfolio site's admin API over HTTP
pub struct HttpGateway {
    pub base_url: String,
    client: ReqwestClient,
}

impl HttpGateway {
    /// Create a gateway
    ///
    /// # Arguments
    /// * `base_url` - Site origin (e.g., "http://127.0.0.1:3000")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> GatewayResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &ApiConfig) -> GatewayResult<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.client.request(method, &url)
    }

    pub(crate) fn project_path(id: &str) -> String {
        format!("{}/{}", PROJECTS_PATH, id)
    }

    /// Build the multipart body: scalar fields first, then the optional image.
    fn multipart_form(fields: &ProjectFields, image: Option<&FilePart>) -> GatewayResult<Form> {
        let mut form = Form::new();

        for (field, value) in fields.entries() {
            form = form.text(field.as_str(), value.to_string());
        }

        if let Some(part) = image {
            let blob = Part::bytes(part.content.to_vec())
                .file_name(part.file_name.clone())
                .mime_str(&part.mime_type)?;

            form = form
                .part(BLOB_FILE_PART, blob)
                .text(FILE_NAME_FIELD, part.file_name.clone());
        }

        Ok(form)
    }

    /// Send a request whose response body is not consumed on success.
    async fn send_expecting_success(&self, req: reqwest::RequestBuilder) -> GatewayResult<()> {
        let response = req.send().await?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(Self::error_from_response(response).await)
    }

    /// Turn a non-success response into an API error.
    ///
    /// Uses `{"error": {"code", "message"}}` when the backend sends it and
    /// falls back to the HTTP status otherwise.
    async fn error_from_response(response: Response) -> GatewayError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        let error = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|value| value.get("error").cloned());

        let code = error
            .as_ref()
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| format!("HTTP_{}", status.as_u16()));
        let message = error
            .as_ref()
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        warn!("Backend returned {}: {} ({})", status, message, code);
        GatewayError::api_error(status.as_u16(), code, message)
    }
}

#[async_trait]
impl ProjectGateway for HttpGateway {
    async fn fetch_project(&self, id: &str) -> GatewayResult<Option<Project>> {
        let response = self
            .request(Method::GET, &Self::project_path(id))
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body = response.bytes().await?;
                let project: Project = serde_json::from_slice(&body)?;
                Ok(Some(project))
            }
            _ => Err(Self::error_from_response(response).await),
        }
    }

    async fn create_project(&self, payload: CreateProjectPayload) -> GatewayResult<()> {
        let form = Self::multipart_form(&payload.fields, Some(&payload.image))?;
        let req = self.request(Method::POST, PROJECTS_PATH).multipart(form);
        self.send_expecting_success(req).await
    }

    async fn update_project(&self, id: &str, payload: UpdateProjectPayload) -> GatewayResult<()> {
        let form = Self::multipart_form(&payload.fields, payload.image.as_ref())?;
        let req = self
            .request(Method::PUT, &Self::project_path(id))
            .multipart(form);
        self.send_expecting_success(req).await
    }
}
