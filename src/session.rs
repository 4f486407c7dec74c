use log::{debug, info, warn};

use crate::api::client::ResumeAnalyzer;
use crate::api::error::{ClientError, UNKNOWN_ERROR};
use crate::models::analysis::AnalysisResult;
use crate::models::resume::ResumeFile;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Form,
    Results(AnalysisResult),
}

/// Owns the form inputs and swaps between the form and the results view.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    selected_file: Option<ResumeFile>,
    job_description: String,
    is_submitting: bool,
    last_error: Option<String>,
    result: Option<AnalysisResult>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        match &self.result {
            Some(result) => View::Results(result.clone()),
            None => View::Form,
        }
    }

    pub fn selected_file(&self) -> Option<&ResumeFile> {
        self.selected_file.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Selecting a file clears whatever error the previous attempt left.
    pub fn select_file(&mut self, file: ResumeFile) {
        debug!("selected resume file {}", file.filename);
        self.selected_file = Some(file);
        self.last_error = None;
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some()
            && !self.job_description.trim().is_empty()
            && !self.is_submitting
    }

    fn check_inputs(&self) -> Result<&ResumeFile, ClientError> {
        let file = self
            .selected_file
            .as_ref()
            .ok_or_else(|| ClientError::Validation("Please select a resume file".to_string()))?;
        if self.job_description.trim().is_empty() {
            return Err(ClientError::Validation(
                "Please enter a job description".to_string(),
            ));
        }
        file.validate()?;
        Ok(file)
    }

    /// Runs one analysis. On success the session moves to the results view;
    /// on failure it stays on the form with `last_error` set.
    pub async fn submit<A: ResumeAnalyzer>(&mut self, analyzer: &A) -> Result<(), ClientError> {
        let file = match self.check_inputs().cloned() {
            Ok(file) => file,
            Err(err) => {
                warn!("submission rejected: {}", err);
                self.last_error = Some(error_message(&err));
                return Err(err);
            }
        };

        self.last_error = None;
        self.result = None;

        let job_description = self.job_description.clone();
        let outcome = {
            let _in_flight = InFlight::start(&mut self.is_submitting);
            analyzer.analyze_resume(&file, &job_description).await
        };

        match outcome {
            Ok(result) => {
                info!("analysis stored, switching to results view");
                self.result = Some(result);
                Ok(())
            }
            Err(err) => {
                warn!("analysis failed: {}", err);
                self.last_error = Some(error_message(&err));
                Err(err)
            }
        }
    }

    /// Drops only the inputs that fail validation, so the form asks for
    /// those again and keeps the rest.
    pub fn discard_invalid_inputs(&mut self) {
        if self
            .selected_file
            .as_ref()
            .is_some_and(|file| file.validate().is_err())
        {
            debug!("discarding rejected resume file");
            self.selected_file = None;
        }
        if self.job_description.trim().is_empty() {
            self.job_description.clear();
        }
    }

    pub fn reset(&mut self) {
        debug!("resetting analysis session");
        *self = Self::default();
    }
}

/// Holds the in-flight flag for the duration of a request. Cleared on drop,
/// so an abandoned submit future does not leave the form disabled.
struct InFlight<'a>(&'a mut bool);

impl<'a> InFlight<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        InFlight(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

fn error_message(err: &ClientError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}
