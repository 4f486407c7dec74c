use log::{debug, error, info};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use crate::api::error::{ClientError, Operation};
use crate::models::analysis::AnalysisResult;
use crate::models::resume::ResumeFile;
use crate::utils::config::ApiConfig;

const USER_AGENT: &str = concat!("rolefit/", env!("CARGO_PKG_VERSION"));

/// Anything that can turn a resume plus job description into an analysis.
#[allow(async_fn_in_trait)]
pub trait ResumeAnalyzer {
    async fn analyze_resume(
        &self,
        file: &ResumeFile,
        job_description: &str,
    ) -> Result<AnalysisResult, ClientError>;
}

/// Single-shot client for the analysis backend. No retries and no timeout:
/// each call runs to completion or failure once.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        ApiClient {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Diagnostic upload against `/upload-test`; returns whatever JSON the
    /// backend sends back.
    pub async fn test_file_upload(
        &self,
        file: &ResumeFile,
    ) -> Result<serde_json::Value, ClientError> {
        let operation = Operation::UploadTest;
        info!("testing upload of {} against {}", file.filename, self.base_url);

        let form = Form::new().part("file", file_part(operation, file)?);
        let response = self
            .client
            .post(self.url("/upload-test"))
            .header("User-Agent", USER_AGENT)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::transport(operation, e.to_string()))?;

        read_json(operation, response).await
    }

    pub async fn check_health(&self) -> Result<serde_json::Value, ClientError> {
        let operation = Operation::Health;
        info!("checking API health at {}", self.base_url);

        let response = self
            .client
            .get(self.url("/health"))
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| ClientError::transport(operation, e.to_string()))?;

        read_json(operation, response).await
    }
}

impl ResumeAnalyzer for ApiClient {
    async fn analyze_resume(
        &self,
        file: &ResumeFile,
        job_description: &str,
    ) -> Result<AnalysisResult, ClientError> {
        let operation = Operation::Analyze;
        info!("submitting {} for analysis to {}", file.filename, self.base_url);
        debug!(
            "resume size: {} bytes, job description length: {}",
            file.bytes.len(),
            job_description.len()
        );

        let form = Form::new()
            .part("resume", file_part(operation, file)?)
            .text("job_description", job_description.to_string());

        let response = self
            .client
            .post(self.url("/analyze"))
            .header("User-Agent", USER_AGENT)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::transport(operation, e.to_string()))?;

        let result: AnalysisResult = read_json(operation, response).await?;
        result
            .validate()
            .map_err(|reason| ClientError::invalid_response(operation, reason))?;

        info!(
            "analysis complete: ATS score {} ({})",
            result.analysis.ats_score, result.metadata.analysis_type
        );
        Ok(result)
    }
}

fn file_part(operation: Operation, file: &ResumeFile) -> Result<Part, ClientError> {
    Part::bytes(file.bytes.clone())
        .file_name(file.filename.clone())
        .mime_str(file.mime_type())
        .map_err(|e| ClientError::transport(operation, e.to_string()))
}

async fn read_json<T: DeserializeOwned>(
    operation: Operation,
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("{} returned {}: {}", operation, status, body);
        return Err(ClientError::http(operation, status, &body));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ClientError::transport(operation, e.to_string()))?;
    debug!("response body length: {}", body.len());

    serde_json::from_str(&body).map_err(|e| ClientError::invalid_response(operation, e.to_string()))
}
