use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default = "default_success")]
    pub success: bool,
    pub analysis: Analysis,
    pub file_info: FileInfo,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub ats_score: f64,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub keyword_matches: Vec<String>,
    pub overall_feedback: String,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub filename: String,
    pub file_type: String,
    pub size_mb: f64,
    pub text_length: u64,
    pub processed_at: String, // naive ISO timestamp from the backend
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub api_version: String,
    pub analysis_type: String,
}

fn default_success() -> bool {
    true
}

impl AnalysisResult {
    /// Checks the numeric ranges the dashboard relies on.
    ///
    /// Returns a human-readable reason when the payload is out of range.
    pub fn validate(&self) -> Result<(), String> {
        let score = self.analysis.ats_score;
        if !score.is_finite() || !(0.0..=100.0).contains(&score) {
            return Err(format!("ats_score {} is outside 0-100", score));
        }

        let confidence = self.analysis.confidence_score;
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(format!(
                "confidence_score {} is outside 0.0-1.0",
                confidence
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_result() -> AnalysisResult {
        AnalysisResult {
            success: true,
            analysis: Analysis {
                ats_score: 72.0,
                strengths: vec![
                    "Strong Python background".to_string(),
                    "Clear project descriptions".to_string(),
                ],
                improvements: vec!["Quantify achievements".to_string()],
                missing_keywords: vec!["aws".to_string()],
                keyword_matches: vec!["python".to_string(), "sql".to_string()],
                overall_feedback: "Solid match with a few gaps.".to_string(),
                confidence_score: 0.846,
            },
            file_info: FileInfo {
                filename: "resume.pdf".to_string(),
                file_type: ".pdf".to_string(),
                size_mb: 0.12,
                text_length: 4210,
                processed_at: "2024-03-05T14:07:09.123456".to_string(),
            },
            metadata: Metadata {
                api_version: "1.0.0".to_string(),
                analysis_type: "ai_powered".to_string(),
            },
        }
    }

    #[test]
    fn deserializes_backend_payload() {
        let body = r#"{
            "success": true,
            "analysis": {
                "ats_score": 85,
                "strengths": ["a"],
                "improvements": [],
                "missing_keywords": [],
                "keyword_matches": ["rust"],
                "overall_feedback": "Great",
                "confidence_score": 0.9
            },
            "file_info": {
                "filename": "cv.docx",
                "file_type": ".docx",
                "size_mb": 0.03,
                "text_length": 1200,
                "processed_at": "2024-01-15T10:30:00.123456"
            },
            "metadata": { "api_version": "1.0.0", "analysis_type": "fallback" }
        }"#;

        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.analysis.ats_score, 85.0);
        assert_eq!(result.analysis.keyword_matches, vec!["rust"]);
        assert_eq!(result.metadata.analysis_type, "fallback");
        assert!(result.validate().is_ok());
    }

    #[test]
    fn success_flag_defaults_to_true() {
        let mut value = serde_json::to_value(sample_result()).unwrap();
        value.as_object_mut().unwrap().remove("success");

        let result: AnalysisResult = serde_json::from_value(value).unwrap();
        assert!(result.success);
    }

    #[test]
    fn rejects_out_of_range_scores() {
        let mut result = sample_result();
        result.analysis.ats_score = 140.0;
        assert!(result.validate().unwrap_err().contains("ats_score"));

        let mut result = sample_result();
        result.analysis.confidence_score = 1.5;
        assert!(result.validate().unwrap_err().contains("confidence_score"));

        let mut result = sample_result();
        result.analysis.confidence_score = f64::NAN;
        assert!(result.validate().is_err());
    }

    #[test]
    fn accepts_range_boundaries() {
        let mut result = sample_result();
        result.analysis.ats_score = 100.0;
        result.analysis.confidence_score = 0.0;
        assert!(result.validate().is_ok());
    }
}
