use std::io::{BufRead, Write};

use colored::Colorize;
use eyre::Result;
use log::info;

use crate::api::client::ResumeAnalyzer;
use crate::dashboard::metrics::DashboardView;
use crate::dashboard::render::DashboardRenderer;
use crate::models::resume::ResumeFile;
use crate::session::{AnalysisSession, View};
use crate::utils::prompt;

/// Prompt-driven form: asks for whatever input is missing, submits, shows the
/// dashboard and offers another round. Returns when the user quits or input
/// runs out.
pub async fn run<A, R, W>(
    analyzer: &A,
    renderer: &DashboardRenderer,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    A: ResumeAnalyzer,
    R: BufRead,
    W: Write,
{
    let mut session = AnalysisSession::new();

    writeln!(output, "\n{}", "=== RoleFit Resume Analyzer ===".cyan().bold())?;

    loop {
        match session.view() {
            View::Form => {
                if session.selected_file().is_none() {
                    let Some(path) = prompt::ask_resume_path(input, output)? else {
                        info!("leaving interactive mode");
                        return Ok(());
                    };
                    match ResumeFile::from_path(&path).await {
                        Ok(file) => session.select_file(file),
                        Err(e) => {
                            writeln!(
                                output,
                                "{}",
                                format!("Could not read {}: {}", path.display(), e).red()
                            )?;
                            continue;
                        }
                    }
                }

                if session.job_description().trim().is_empty() {
                    let Some(text) = prompt::ask_job_description(input, output)? else {
                        info!("leaving interactive mode");
                        return Ok(());
                    };
                    session.set_job_description(text);
                }

                if session.can_submit() {
                    writeln!(output, "{}", "Analyzing...".dimmed())?;
                }
                if let Err(err) = session.submit(analyzer).await {
                    if let Some(message) = session.last_error() {
                        writeln!(output, "{}", message.red())?;
                    }

                    if err.is_validation() {
                        session.discard_invalid_inputs();
                    } else if !prompt::ask_yes_no(input, output, "Try again with the same inputs?")? {
                        session.reset();
                    }
                }
            }
            View::Results(result) => {
                renderer
                    .show(&DashboardView::from_result(&result), output)
                    .await?;

                if !prompt::ask_yes_no(input, output, "Analyze another resume?")? {
                    return Ok(());
                }
                session.reset();
            }
        }
    }
}
