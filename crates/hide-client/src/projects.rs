//! Project endpoints.

use hide_core::entities::Project;
use hide_core::requests::CreateProjectRequest;

use crate::{
    HideClient,
    error::HideError,
    http::{check_status, decode},
    transport::Method,
};

impl HideClient {
    /// Create a project from a source repository URL.
    ///
    /// `POST /projects` with `{"repoUrl": ...}`.
    ///
    /// # Errors
    ///
    /// Returns [`HideError::Http`] on a non-success status (the body is not
    /// kept), [`HideError::Decode`] if the response is not a project and
    /// [`HideError::Transport`] if the request cannot be sent.
    pub fn create_project(&self, repository_url: &str) -> Result<Project, HideError> {
        let url = format!("{}/projects", self.base_url);
        let body = CreateProjectRequest {
            repo_url: repository_url.to_string(),
        };
        let resp = self.send_json(Method::POST, url.clone(), &body)?;
        let resp = check_status(resp, &url)?;

        let project: Project = decode(&resp)?;
        tracing::info!(project_id = %project.id, repository_url, "created project");
        Ok(project)
    }
}
