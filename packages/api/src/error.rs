use thiserror::Error;

/// Why an API call failed. `Display` is the message shown to the user.
///
/// Errors are classified by HTTP status only: 401 means the session is gone,
/// 404 means the resource (or the whole server) is missing, everything else
/// is a generic failure carrying the backend's message when it sent one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No token in the session; the request was never sent.
    #[error("Not signed in")]
    MissingToken,

    /// Login rejected the id/password pair.
    #[error("Invalid ID or password")]
    InvalidCredentials,

    /// Any other 401: the token expired or was revoked.
    #[error("Session expired, please log in again")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Failed { status: u16, message: String },

    /// The request never got an HTTP answer.
    #[error("Network error: {0}")]
    Network(String),

    /// 2xx answer whose body did not match the expected schema.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the user has to sign in again before retrying.
    pub fn needs_login(&self) -> bool {
        matches!(self, ApiError::MissingToken | ApiError::Unauthorized)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Which call failed; picks the fallback message for generic failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Login,
    Other(&'static str),
}

/// Map a non-2xx status to an [`ApiError`].
///
/// `body` is the raw response body; a JSON `{"message": "..."}` in it becomes
/// the message of a generic failure.
pub fn classify_status(status: u16, body: &str, call: Call) -> ApiError {
    match (status, call) {
        (401, Call::Login) => ApiError::InvalidCredentials,
        (401, Call::Other(_)) => ApiError::Unauthorized,
        (404, Call::Login) => ApiError::NotFound("Server not found".to_string()),
        (404, Call::Other(_)) => ApiError::NotFound("Resource not found".to_string()),
        (status, call) => {
            let message = backend_message(body).unwrap_or_else(|| match call {
                Call::Login => "Login failed".to_string(),
                Call::Other(fallback) => fallback.to_string(),
            });
            ApiError::Failed { status, message }
        }
    }
}

fn backend_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?.trim();
    (!message.is_empty()).then(|| message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const COURSES: Call = Call::Other("Failed to load courses");

    #[test]
    fn test_unauthorized_is_session_expired() {
        let err = classify_status(401, "", COURSES);
        assert_eq!(err, ApiError::Unauthorized);
        assert_eq!(err.to_string(), "Session expired, please log in again");
        assert!(err.needs_login());
    }

    #[test]
    fn test_login_statuses() {
        assert_eq!(classify_status(401, "", Call::Login), ApiError::InvalidCredentials);
        assert_eq!(
            classify_status(404, "", Call::Login).to_string(),
            "Server not found"
        );
        assert_eq!(classify_status(500, "", Call::Login).to_string(), "Login failed");
        assert!(!ApiError::InvalidCredentials.needs_login());
    }

    #[test]
    fn test_not_found() {
        assert_eq!(
            classify_status(404, "<html>", COURSES),
            ApiError::NotFound("Resource not found".to_string())
        );
    }

    #[test]
    fn test_generic_failure_prefers_backend_message() {
        assert_eq!(
            classify_status(409, r#"{"message": "Already enrolled"}"#, COURSES),
            ApiError::Failed {
                status: 409,
                message: "Already enrolled".to_string()
            }
        );
        assert_eq!(
            classify_status(500, "oops", COURSES).to_string(),
            "Failed to load courses"
        );
        assert_eq!(
            classify_status(500, r#"{"message": "  "}"#, COURSES).to_string(),
            "Failed to load courses"
        );
    }
}
