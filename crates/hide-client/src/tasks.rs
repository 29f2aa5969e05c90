//! Task endpoints.

use hide_core::entities::{Task, TaskResult};
use hide_core::requests::TaskRequest;

use crate::{
    HideClient,
    error::HideError,
    http::{check_response, check_status, decode},
    transport::Method,
};

impl HideClient {
    /// List the tasks defined for a project, in the order the service returns them.
    ///
    /// `GET /projects/{id}/tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`HideError::Http`] on a non-success status (the body is not
    /// kept), [`HideError::Decode`] if any entry is malformed and
    /// [`HideError::Transport`] if the request cannot be sent.
    pub fn get_tasks(&self, project_id: &str) -> Result<Vec<Task>, HideError> {
        let url = self.project_url(project_id, "/tasks");
        let resp = self.send_empty(Method::GET, url.clone())?;
        let resp = check_status(resp, &url)?;
        decode(&resp)
    }

    /// Run either a raw shell `command` or a predefined task `alias`.
    ///
    /// Exactly one of the two must be given; empty strings count as absent.
    /// The arguments are checked before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`HideError::InvalidArgument`] if neither or both are given.
    /// See [`Self::run_task_request`] for remote failures.
    pub fn run_task(
        &self,
        project_id: &str,
        command: Option<&str>,
        alias: Option<&str>,
    ) -> Result<TaskResult, HideError> {
        let request = TaskRequest::from_parts(command, alias)?;
        self.run_task_request(project_id, &request)
    }

    /// Run a task described by an already validated [`TaskRequest`].
    ///
    /// `POST /projects/{id}/tasks` with `{"command": ...}` or `{"alias": ...}`.
    ///
    /// # Errors
    ///
    /// Returns [`HideError::Api`] carrying the raw response body on a
    /// non-success status, [`HideError::Decode`] if the response is not a
    /// task result and [`HideError::Transport`] if the request cannot be sent.
    pub fn run_task_request(
        &self,
        project_id: &str,
        request: &TaskRequest,
    ) -> Result<TaskResult, HideError> {
        let url = self.project_url(project_id, "/tasks");
        let resp = check_response(self.send_json(Method::POST, url, request)?)?;

        let result: TaskResult = decode(&resp)?;
        tracing::debug!(project_id, exit_code = result.exit_code, "task finished");
        Ok(result)
    }
}
