use api::{ApiError, ApiStatus};
use tracing::{info, warn};

use crate::StatusMessage;

// result of the one-shot GET / made when the home page mounts
//
// purely informational, nothing else on the page looks at it
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Connectivity {
    #[default]
    Checking,
    Connected {
        message: String,
        ai_model_loaded: Option<bool>,
    },
    Disconnected {
        detail: String,
    },
}

impl Connectivity {
    pub fn from_probe(outcome: Result<ApiStatus, ApiError>) -> (Self, StatusMessage) {
        match outcome {
            Ok(status) => {
                info!({ message = %status.message, ai_model_loaded = ?status.ai_model_loaded }, "api is reachable");
                let banner = StatusMessage::info(format!("API is running: {}", status.message));
                (
                    Connectivity::Connected {
                        message: status.message,
                        ai_model_loaded: status.ai_model_loaded,
                    },
                    banner,
                )
            }
            Err(err) => {
                warn!({ error = %err }, "api is not reachable");
                let banner = match &err {
                    ApiError::Rejected { status, .. } => {
                        StatusMessage::error(format!("API is not accessible ({status})"))
                    }
                    _ => StatusMessage::error(format!("API connection error: {err}")),
                };
                (
                    Connectivity::Disconnected {
                        detail: err.to_string(),
                    },
                    banner,
                )
            }
        }
    }

    // None while the probe is still in flight
    pub fn is_connected(&self) -> Option<bool> {
        match self {
            Connectivity::Checking => None,
            Connectivity::Connected { .. } => Some(true),
            Connectivity::Disconnected { .. } => Some(false),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Connectivity::Checking => String::from("Checking API..."),
            Connectivity::Connected {
                ai_model_loaded: Some(false),
                ..
            } => String::from("API connected (captioning model not loaded)"),
            Connectivity::Connected { .. } => String::from("API connected"),
            Connectivity::Disconnected { detail } => format!("API unreachable: {detail}"),
        }
    }
}
