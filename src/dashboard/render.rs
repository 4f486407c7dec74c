use std::io::Write;
use std::time::Duration;

use colored::{ColoredString, Colorize};
use eyre::Result;

use crate::dashboard::metrics::{DashboardView, ScoreTier};
use crate::models::diagnostics::{HealthStatus, UploadTestReport};
use crate::utils::config::DisplayConfig;

const GAUGE_WIDTH: usize = 30;
const BAR_WIDTH: usize = 24;
const ANIMATION_FRAMES: u32 = 8;

pub struct DashboardRenderer {
    animate: bool,
    frame_delay: Duration,
}

impl DashboardRenderer {
    pub fn new(display: &DisplayConfig, animate_override: bool) -> Self {
        Self {
            animate: display.animate && animate_override,
            frame_delay: Duration::from_millis(display.animation_delay_ms),
        }
    }

    /// Writes the dashboard. With animation on, the score gauge fills up
    /// before the remaining panels appear; the final output is identical.
    pub async fn show<W: Write>(&self, view: &DashboardView, out: &mut W) -> Result<()> {
        if !self.animate {
            write!(out, "{}", render_dashboard(view))?;
            out.flush()?;
            return Ok(());
        }

        write!(out, "{}", header())?;
        for frame in 0..=ANIMATION_FRAMES {
            let score = view.score * f64::from(frame) / f64::from(ANIMATION_FRAMES);
            write!(out, "\r{}", score_line(score, view.tier))?;
            out.flush()?;
            if frame < ANIMATION_FRAMES {
                tokio::time::sleep(self.frame_delay).await;
            }
        }
        write!(out, "\n{}", body(view))?;
        out.flush()?;

        Ok(())
    }
}

pub fn render_dashboard(view: &DashboardView) -> String {
    format!("{}{}\n{}", header(), score_line(view.score, view.tier), body(view))
}

fn header() -> String {
    format!("\n{}\n\n", "=== Resume Analysis ===".cyan().bold())
}

fn tier_color(text: &str, tier: ScoreTier) -> ColoredString {
    match tier {
        ScoreTier::Excellent => text.green(),
        ScoreTier::Good => text.yellow(),
        ScoreTier::Low => text.red(),
    }
}

/// `filled` is a fraction in 0.0..=1.0.
pub fn gauge(filled: f64, width: usize) -> String {
    let cells = (filled.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(cells), "░".repeat(width - cells))
}

fn score_line(score: f64, tier: ScoreTier) -> String {
    format!(
        "{:<18}{} {:>3}/100 {}",
        "ATS score".bold(),
        tier_color(&gauge(score / 100.0, GAUGE_WIDTH), tier),
        score.round(),
        tier_color(&format!("[{}]", tier.label()), tier)
    )
}

fn body(view: &DashboardView) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<18}{} {}/{} matched ({:.0}%)\n",
        "Keyword match".bold(),
        gauge(view.match_ratio, GAUGE_WIDTH).blue(),
        view.matched_count,
        view.matched_count + view.missing_count,
        view.match_ratio * 100.0
    ));
    out.push_str(&format!(
        "{:<18}{} {}%\n",
        "Confidence".bold(),
        gauge(f64::from(view.confidence_percent) / 100.0, GAUGE_WIDTH).magenta(),
        view.confidence_percent
    ));

    out.push_str(&format!("\n{}\n", "Breakdown".cyan().bold()));
    for bar in &view.bars {
        out.push_str(&format!(
            "  {:<18}{} {}\n",
            bar.label,
            gauge(bar.width, BAR_WIDTH).cyan(),
            bar.count
        ));
    }

    out.push_str(&section("Strengths", &view.strengths, "✓", |s| s.green()));
    out.push_str(&section("Improvements", &view.improvements, "→", |s| s.yellow()));
    out.push_str(&section("Missing keywords", &view.missing_keywords, "✗", |s| s.red()));
    out.push_str(&section("Keyword matches", &view.keyword_matches, "•", |s| s.green()));

    out.push_str(&format!("\n{}\n", "Summary".cyan().bold()));
    out.push_str(&format!("  {}\n", view.overall_feedback));
    out.push_str(&format!(
        "\n  {} {} | {} {} | {} {}\n",
        "File:".dimmed(),
        view.filename,
        "Analysis:".dimmed(),
        view.analysis_type,
        "Processed:".dimmed(),
        view.processed_at
    ));

    out
}

fn section(
    title: &str,
    items: &[String],
    bullet: &str,
    paint: fn(&str) -> ColoredString,
) -> String {
    let mut out = format!("\n{}\n", title.cyan().bold());
    for item in items {
        out.push_str(&format!("  {} {}\n", paint(bullet), item));
    }
    out
}

pub fn render_health(health: &HealthStatus) -> String {
    let status = health.status.as_deref().unwrap_or("unknown");
    let status = if health.is_healthy() {
        status.green().bold()
    } else {
        status.yellow().bold()
    };

    let mut out = format!("{} {}\n", "API status:".bold(), status);
    if let Some(message) = &health.message {
        out.push_str(&format!("  {}\n", message));
    }
    if let Some(version) = &health.version {
        out.push_str(&format!("  {} {}\n", "version:".dimmed(), version));
    }
    if let Some(configured) = health.openai_configured {
        let mode = if configured { "ai_powered" } else { "fallback" };
        out.push_str(&format!("  {} {}\n", "analysis mode:".dimmed(), mode));
    }
    if let Some(timestamp) = &health.timestamp {
        out.push_str(&format!("  {} {}\n", "checked at:".dimmed(), timestamp));
    }
    out
}

pub fn render_upload_report(report: &UploadTestReport) -> String {
    let outcome = match report.success {
        Some(false) => "failed".red(),
        _ => "ok".green(),
    };
    let mut out = format!("{} {}\n", "Upload test".cyan().bold(), outcome);
    if let Some(info) = &report.file_info {
        if let Some(filename) = &info.filename {
            out.push_str(&format!(
                "  {} {} {}\n",
                "file:".dimmed(),
                filename,
                info.file_type.as_deref().unwrap_or("")
            ));
        }
        if let Some(size) = info.size_mb {
            out.push_str(&format!("  {} {:.2} MB\n", "size:".dimmed(), size));
        }
        if let (Some(chars), Some(words)) = (info.content_length, info.word_count) {
            out.push_str(&format!(
                "  {} {} characters, {} words\n",
                "extracted:".dimmed(),
                chars,
                words
            ));
        }
    }
    if let Some(preview) = &report.preview {
        out.push_str(&format!("\n{}\n{}\n", "Preview".bold(), preview));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::metrics::{NO_KEYWORD_MATCHES, NO_MISSING_KEYWORDS};
    use crate::models::analysis::tests::sample_result;

    #[test]
    fn gauge_has_fixed_width() {
        assert_eq!(gauge(0.0, 10), "░".repeat(10));
        assert_eq!(gauge(1.0, 10), "█".repeat(10));
        assert_eq!(gauge(0.5, 10), format!("{}{}", "█".repeat(5), "░".repeat(5)));
        assert_eq!(gauge(7.0, 4), "█".repeat(4));
    }

    #[test]
    fn dashboard_lists_everything_in_order() {
        let view = DashboardView::from_result(&sample_result());
        let text = render_dashboard(&view);

        let first = text.find("Strong Python background").unwrap();
        let second = text.find("Clear project descriptions").unwrap();
        assert!(first < second);
        assert!(text.contains("Quantify achievements"));
        assert!(text.contains("2/3 matched"));
        assert!(text.contains("85%"));
        assert!(text.contains("Solid match with a few gaps."));
        assert!(text.contains("resume.pdf"));
        assert!(text.contains("ai_powered"));
        assert!(text.contains("3/5/2024, 2:07:09 PM"));
        assert!(text.contains("[good]"));
    }

    #[test]
    fn empty_keyword_lists_show_placeholders() {
        let mut result = sample_result();
        result.analysis.missing_keywords.clear();
        result.analysis.keyword_matches.clear();

        let text = render_dashboard(&DashboardView::from_result(&result));
        assert!(text.contains(NO_MISSING_KEYWORDS));
        assert!(text.contains(NO_KEYWORD_MATCHES));
        assert!(text.contains("0/0 matched (0%)"));
    }

    #[test]
    fn rendering_is_repeatable() {
        let view = DashboardView::from_result(&sample_result());
        assert_eq!(render_dashboard(&view), render_dashboard(&view));
    }

    #[test]
    fn health_report_mentions_mode() {
        let text = render_health(&HealthStatus {
            status: Some("healthy".to_string()),
            openai_configured: Some(true),
            ..Default::default()
        });
        assert!(text.contains("healthy"));
        assert!(text.contains("ai_powered"));
    }

    fn renderer(animate: bool) -> DashboardRenderer {
        DashboardRenderer::new(
            &DisplayConfig {
                animate,
                animation_delay_ms: 0,
            },
            true,
        )
    }

    #[tokio::test]
    async fn static_show_writes_the_full_dashboard() {
        let view = DashboardView::from_result(&sample_result());
        let mut out = Vec::new();

        renderer(false).show(&view, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), render_dashboard(&view));
    }

    #[tokio::test]
    async fn animation_ends_on_the_static_frame() {
        let view = DashboardView::from_result(&sample_result());
        let mut out = Vec::new();

        renderer(true).show(&view, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        let frames = text.strip_prefix(&header()).unwrap();
        assert_eq!(frames.matches('\r').count(), ANIMATION_FRAMES as usize + 1);

        let (_, last) = frames.rsplit_once('\r').unwrap();
        let (final_frame, rest) = last.split_once('\n').unwrap();
        assert_eq!(final_frame, score_line(view.score, view.tier));
        assert_eq!(rest, body(&view));

        // first frame starts from an empty gauge
        let first = frames.split('\r').nth(1).unwrap();
        assert_eq!(first, score_line(0.0, view.tier));

        assert_eq!(
            format!("{}{}", header(), last),
            render_dashboard(&view)
        );
    }
}
