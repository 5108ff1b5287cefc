use api::{ApiError, UploadResult};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::StatusMessage;

// upload lifecycle for the home page
//
//   Idle -> Uploading -> Succeeded | Failed
//   Succeeded | Failed -> Idle         (clear)
//   Idle | Succeeded | Failed -> Uploading (new selection)
//
// the flow is owned by a single view and only mutated from the ui thread, but
// the async gap between begin() and finish() means the busy check has to live
// here rather than relying on the picker being disabled
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading {
        filename: String,
    },
    Succeeded(UploadResult),
    Failed(ApiError),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FlowError {
    #[error("Please select a file first")]
    NoFile,

    #[error("An upload is already in progress")]
    Busy,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadFlow {
    phase: UploadPhase,
    // bumped after every finished attempt; the view keys the file input on
    // this so the browser forgets the previous selection
    picker_generation: u32,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, UploadPhase::Uploading { .. })
    }

    pub fn result(&self) -> Option<&UploadResult> {
        match &self.phase {
            UploadPhase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn picker_generation(&self) -> u32 {
        self.picker_generation
    }

    // called with the name of the picked file, or None if the picker came
    // back empty
    pub fn begin(&mut self, filename: Option<&str>) -> Result<StatusMessage, FlowError> {
        if self.is_busy() {
            warn!("ignoring file selection while an upload is in progress");
            return Err(FlowError::Busy);
        }

        let filename = filename.ok_or(FlowError::NoFile)?;

        debug!({ filename = %filename }, "starting upload");
        self.phase = UploadPhase::Uploading {
            filename: filename.to_owned(),
        };

        Ok(StatusMessage::info("Uploading file..."))
    }

    pub fn finish(&mut self, outcome: Result<UploadResult, ApiError>) -> StatusMessage {
        self.picker_generation = self.picker_generation.wrapping_add(1);

        match outcome {
            Ok(result) => {
                info!({ image_id = %result.image_id }, "upload succeeded");
                self.phase = UploadPhase::Succeeded(result);
                StatusMessage::info("Upload completed successfully!")
            }
            Err(err) => {
                warn!({ error = %err }, "upload failed");
                let message = match &err {
                    ApiError::Rejected { .. } => format!("Upload failed: {err}"),
                    _ => format!("Upload error: {err}"),
                };
                self.phase = UploadPhase::Failed(err);
                StatusMessage::error(message)
            }
        }
    }

    // returns false if there was an upload in flight, which is left alone
    pub fn clear(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }

        self.phase = UploadPhase::Idle;
        true
    }
}
