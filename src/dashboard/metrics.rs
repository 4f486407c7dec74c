//! Display values derived from an [`AnalysisResult`].
//!
//! Everything here is a pure function of the result, so rendering the same
//! result twice always yields the same numbers.

use chrono::{DateTime, Local, NaiveDateTime};

use crate::models::analysis::{Analysis, AnalysisResult};

pub const NO_MISSING_KEYWORDS: &str = "No missing keywords identified";
pub const NO_KEYWORD_MATCHES: &str = "No keyword matches found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Low,
}

impl ScoreTier {
    /// 80 and 60 are inclusive lower bounds.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::Excellent
        } else if score >= 60.0 {
            ScoreTier::Good
        } else {
            ScoreTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "excellent",
            ScoreTier::Good => "good",
            ScoreTier::Low => "low",
        }
    }
}

/// Share of keywords matched; 0 when the backend reported none either way.
pub fn keyword_match_ratio(matched: usize, missing: usize) -> f64 {
    let total = matched + missing;
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    }
}

pub fn confidence_percent(confidence: f64) -> u32 {
    (confidence * 100.0).round().clamp(0.0, 100.0) as u32
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub label: &'static str,
    pub count: usize,
    /// 0.0..=1.0 of the chart width
    pub width: f64,
}

pub fn category_bars(analysis: &Analysis) -> Vec<CategoryBar> {
    let counts = [
        ("Strengths", analysis.strengths.len()),
        ("Improvements", analysis.improvements.len()),
        ("Missing keywords", analysis.missing_keywords.len()),
        ("Keyword matches", analysis.keyword_matches.len()),
    ];
    let denominator = counts.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);

    counts
        .into_iter()
        .map(|(label, count)| CategoryBar {
            label,
            count,
            width: count as f64 / denominator as f64,
        })
        .collect()
}

/// Keyword entries, or the placeholder line when there are none.
pub fn keyword_entries(keywords: &[String], placeholder: &str) -> Vec<String> {
    if keywords.is_empty() {
        vec![placeholder.to_string()]
    } else {
        keywords.to_vec()
    }
}

const PROCESSED_AT_DISPLAY: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Renders the backend timestamp as `M/D/YYYY, h:mm:ss AM` in the viewer's
/// local time. Naive timestamps are already local and are shown as is;
/// timestamps that do not parse are shown as received.
pub fn format_processed_at(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt
            .with_timezone(&Local)
            .format(PROCESSED_AT_DISPLAY)
            .to_string();
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.format(PROCESSED_AT_DISPLAY).to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub score: f64,
    pub tier: ScoreTier,
    pub matched_count: usize,
    pub missing_count: usize,
    pub match_ratio: f64,
    pub confidence_percent: u32,
    pub bars: Vec<CategoryBar>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub keyword_matches: Vec<String>,
    pub overall_feedback: String,
    pub filename: String,
    pub analysis_type: String,
    pub processed_at: String,
}

impl DashboardView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let analysis = &result.analysis;
        let matched_count = analysis.keyword_matches.len();
        let missing_count = analysis.missing_keywords.len();

        DashboardView {
            score: analysis.ats_score,
            tier: ScoreTier::from_score(analysis.ats_score),
            matched_count,
            missing_count,
            match_ratio: keyword_match_ratio(matched_count, missing_count),
            confidence_percent: confidence_percent(analysis.confidence_score),
            bars: category_bars(analysis),
            strengths: analysis.strengths.clone(),
            improvements: analysis.improvements.clone(),
            missing_keywords: keyword_entries(&analysis.missing_keywords, NO_MISSING_KEYWORDS),
            keyword_matches: keyword_entries(&analysis.keyword_matches, NO_KEYWORD_MATCHES),
            overall_feedback: analysis.overall_feedback.clone(),
            filename: result.file_info.filename.clone(),
            analysis_type: result.metadata.analysis_type.clone(),
            processed_at: format_processed_at(&result.file_info.processed_at),
        }
    }
}
