//! File endpoints.
//!
//! Every operation here reports a non-success status as [`HideError::Api`]
//! with the raw response body as its message.

use hide_core::entities::{File, FileInfo};
use hide_core::requests::{CreateFileRequest, UpdateFileRequest};

use crate::{
    HideClient,
    error::HideError,
    http::{check_response, decode},
    transport::Method,
};

impl HideClient {
    /// Create a file at `path` with `content`.
    ///
    /// `POST /projects/{id}/files` with `{"path": ..., "content": ...}`.
    ///
    /// # Errors
    ///
    /// Returns [`HideError::Api`] on a non-success status,
    /// [`HideError::Decode`] if the response is not a file and
    /// [`HideError::Transport`] if the request cannot be sent.
    pub fn create_file(
        &self,
        project_id: &str,
        path: &str,
        content: &str,
    ) -> Result<File, HideError> {
        let url = self.project_url(project_id, "/files");
        let body = CreateFileRequest {
            path: path.to_string(),
            content: content.to_string(),
        };
        let resp = check_response(self.send_json(Method::POST, url, &body)?)?;
        decode(&resp)
    }

    /// Fetch the full content of the file at `path`.
    ///
    /// `GET /projects/{id}/files/{path}`.
    ///
    /// # Errors
    ///
    /// See [`Self::create_file`].
    pub fn get_file(&self, project_id: &str, path: &str) -> Result<File, HideError> {
        let url = self.file_url(project_id, path);
        let resp = check_response(self.send_empty(Method::GET, url)?)?;
        decode(&resp)
    }

    /// Replace the content of the existing file at `path`.
    ///
    /// `PUT /projects/{id}/files/{path}` with `{"content": ...}`.
    ///
    /// # Errors
    ///
    /// See [`Self::create_file`].
    pub fn update_file(
        &self,
        project_id: &str,
        path: &str,
        content: &str,
    ) -> Result<File, HideError> {
        tracing::debug!(project_id, path, bytes = content.len(), "updating file");
        tracing::trace!(project_id, path, content, "new file content");

        let url = self.file_url(project_id, path);
        let body = UpdateFileRequest {
            content: content.to_string(),
        };
        let resp = check_response(self.send_json(Method::PUT, url, &body)?)?;
        decode(&resp)
    }

    /// Delete the file at `path`.
    ///
    /// `DELETE /projects/{id}/files/{path}`. Returns `true` only for status
    /// 200; any other 2xx status (e.g. 204) returns `false`.
    ///
    /// # Errors
    ///
    /// Returns [`HideError::Api`] on a non-success status and
    /// [`HideError::Transport`] if the request cannot be sent.
    pub fn delete_file(&self, project_id: &str, path: &str) -> Result<bool, HideError> {
        let url = self.file_url(project_id, path);
        let resp = check_response(self.send_empty(Method::DELETE, url)?)?;
        Ok(resp.status == 200)
    }

    /// List path-only entries for every file in a project.
    ///
    /// `GET /projects/{id}/files`. An empty project yields an empty list.
    ///
    /// # Errors
    ///
    /// See [`Self::create_file`].
    pub fn list_files(&self, project_id: &str) -> Result<Vec<FileInfo>, HideError> {
        let url = self.project_url(project_id, "/files");
        let resp = check_response(self.send_empty(Method::GET, url)?)?;
        decode(&resp)
    }
}
