use serde::Deserialize;

/// Loose view of the `/health` payload. Every field is optional since the
/// endpoint only promises "some JSON".
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct HealthStatus {
    pub status: Option<String>,
    pub message: Option<String>,
    pub version: Option<String>,
    pub timestamp: Option<String>,
    pub openai_configured: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct UploadTestReport {
    pub success: Option<bool>,
    pub file_info: Option<UploadedFileInfo>,
    pub preview: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct UploadedFileInfo {
    pub filename: Option<String>,
    pub file_type: Option<String>,
    pub size_mb: Option<f64>,
    pub content_length: Option<u64>,
    pub word_count: Option<u64>,
}

impl HealthStatus {
    pub fn from_value(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    pub fn is_healthy(&self) -> bool {
        self.status.as_deref() == Some("healthy")
    }
}

impl UploadTestReport {
    pub fn from_value(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}
