use thiserror::Error;

// everything that can go wrong between pressing a button and having a decoded
// response in hand
//
// the Display impls are shown to the user verbatim, so Rejected deliberately
// carries the raw body text from the server
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("{status} - {body}")]
    Rejected { status: u16, body: String },

    #[error("{0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display_has_status_and_body() {
        let err = ApiError::Rejected {
            status: 400,
            body: String::from(r#"{"detail":"File must be an image"}"#),
        };

        assert_eq!(err.to_string(), r#"400 - {"detail":"File must be an image"}"#);
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn serde_errors_become_decode_errors() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();

        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn timeout_display_names_duration() {
        assert_eq!(
            ApiError::Timeout(1500).to_string(),
            "request timed out after 1500 ms"
        );
    }
}
