use std::path::Path;

use eyre::{Result, eyre};
use log::info;

use crate::utils::cli::AnalyzeArgs;

pub async fn job_description_from_file(path: &Path) -> Result<String> {
    info!("reading job description from file: {}", path.display());

    tokio::fs::read_to_string(path).await.map_err(Into::into)
}

/// Job description for `analyze`, from `--job-file` or `--job-text`.
pub async fn job_description(args: &AnalyzeArgs) -> Result<String> {
    if let Some(ref file) = args.job_file {
        job_description_from_file(file).await
    } else if let Some(ref text) = args.job_text {
        Ok(text.clone())
    } else {
        Err(eyre!(
            "no job description provided, pass --job-file or --job-text"
        ))
    }
}
