pub mod animals;
pub mod config;
pub mod format;
pub mod handoff;
pub mod probe;
pub mod upload;

// a one-line message for the status banner on the home page
//
// both the connectivity probe and the uploader write here, last one wins
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: true,
        }
    }
}
