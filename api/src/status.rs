use serde::{Deserialize, Serialize};

// health check body returned by GET /
//
// the server also reports its endpoint table, which we have no use for
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiStatus {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_model_loaded: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_health_check() {
        let body = r#"{
            "message": "Image Analysis API is running",
            "ai_model_loaded": true,
            "endpoints": {"upload": "/upload"}
        }"#;

        let status: ApiStatus = serde_json::from_str(body).unwrap();

        assert_eq!(status.message, "Image Analysis API is running");
        assert_eq!(status.ai_model_loaded, Some(true));
    }

    #[test]
    fn model_flag_is_optional() {
        let status: ApiStatus = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();

        assert_eq!(status.ai_model_loaded, None);
    }

    #[test]
    fn message_is_required() {
        assert!(serde_json::from_str::<ApiStatus>(r#"{"status": "ok"}"#).is_err());
    }
}
