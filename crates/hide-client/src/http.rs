//! Shared response helpers for the client operations.
//!
//! Two status policies exist side by side. [`check_status`] reports only the
//! status code and is used by project creation and task listing.
//! [`check_response`] keeps the raw body as the error message and is used by
//! task runs and every file operation.

use serde::de::DeserializeOwned;

use crate::error::HideError;
use crate::transport::HttpResponse;

/// Fail with [`HideError::Http`] on a non-success status.
pub(crate) fn check_status(resp: HttpResponse, url: &str) -> Result<HttpResponse, HideError> {
    if !resp.is_success() {
        tracing::warn!(status = resp.status, url, "request failed");
        return Err(HideError::Http {
            status: resp.status,
            url: url.to_string(),
        });
    }
    Ok(resp)
}

/// Fail with [`HideError::Api`] carrying the raw body on a non-success status.
pub(crate) fn check_response(resp: HttpResponse) -> Result<HttpResponse, HideError> {
    if !resp.is_success() {
        tracing::warn!(status = resp.status, body = %resp.body, "request failed");
        return Err(HideError::Api {
            status: resp.status,
            message: resp.body,
        });
    }
    Ok(resp)
}

/// Deserialize a JSON body into `T`.
pub(crate) fn decode<T: DeserializeOwned>(resp: &HttpResponse) -> Result<T, HideError> {
    Ok(serde_json::from_str(&resp.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hide_core::entities::FileInfo;

    #[test]
    fn check_status_passes_success() {
        let resp = HttpResponse::new(201, "{}");
        assert_eq!(check_status(resp.clone(), "u").unwrap(), resp);
    }

    #[test]
    fn check_status_drops_body() {
        let err = check_status(HttpResponse::new(422, "bad repo url"), "http://h/projects")
            .unwrap_err();
        assert!(matches!(err, HideError::Http { status: 422, .. }));
        assert!(!err.to_string().contains("bad repo url"));
    }

    #[test]
    fn check_response_keeps_body_verbatim() {
        let body = "  {\"error\": \"not found\"}\n";
        let err = check_response(HttpResponse::new(404, body)).unwrap_err();
        assert_eq!(err.message(), Some(body));
    }

    #[test]
    fn decode_reports_structural_errors() {
        let resp = HttpResponse::new(200, r#"[{"name": "a.txt"}]"#);
        let err = decode::<Vec<FileInfo>>(&resp).unwrap_err();
        assert!(matches!(err, HideError::Decode(_)));
    }

    #[test]
    fn decode_rejects_non_json() {
        let resp = HttpResponse::new(200, "OK");
        assert!(matches!(
            decode::<Vec<FileInfo>>(&resp),
            Err(HideError::Decode(_))
        ));
    }
}
