use std::path::Path;

use eyre::{Result, eyre};
use log::{debug, info};

use crate::api::error::ClientError;

pub const ALLOWED_EXTENSIONS: [&str; 3] = [".pdf", ".docx", ".txt"];
pub const MAX_FILE_SIZE_MB: f64 = 10.0;

/// A resume file held in memory, ready to be sent as a multipart part.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self> {
        info!("reading resume from file: {}", path.display());

        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| eyre!("invalid resume path: {}", path.display()))?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        debug!("read {} bytes from {}", bytes.len(), filename);

        Ok(Self::new(filename, bytes))
    }

    /// Lower-cased extension including the dot, e.g. `.pdf`.
    pub fn extension(&self) -> String {
        Path::new(&self.filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
            .unwrap_or_default()
    }

    pub fn size_mb(&self) -> f64 {
        self.bytes.len() as f64 / (1024.0 * 1024.0)
    }

    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_str() {
            ".pdf" => "application/pdf",
            ".docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ".txt" => "text/plain",
            _ => "application/octet-stream",
        }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if !ALLOWED_EXTENSIONS.contains(&self.extension().as_str()) {
            return Err(ClientError::Validation(format!(
                "Unsupported file type. Supported: {}",
                ALLOWED_EXTENSIONS.join(", ")
            )));
        }

        if self.bytes.is_empty() {
            return Err(ClientError::Validation(format!(
                "Resume file {} is empty",
                self.filename
            )));
        }

        let size_mb = self.size_mb();
        if size_mb > MAX_FILE_SIZE_MB {
            return Err(ClientError::Validation(format!(
                "File too large ({:.1}MB). Maximum: {}MB",
                size_mb, MAX_FILE_SIZE_MB
            )));
        }

        Ok(())
    }
}
