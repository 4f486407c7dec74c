use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "rolefit")]
#[command(about = "Score a resume against a job description using the RoleFit analysis API", long_about = None)]
pub struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml", global = true)]
    pub config: PathBuf,

    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info, global = true)]
    pub verbosity: LevelFilter,

    /// Disable the dashboard entrance animation
    #[arg(long, global = true)]
    pub no_animate: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a resume against a job description and show the dashboard
    Analyze(AnalyzeArgs),

    /// Fill in the resume and job description interactively
    Interactive,

    /// Upload a file to the diagnostic endpoint and show the extracted text
    UploadTest {
        /// Resume file (.pdf, .docx or .txt)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Check whether the analysis API is reachable
    Health,
}

#[derive(ClapArgs, Debug)]
pub struct AnalyzeArgs {
    /// Resume file (.pdf, .docx or .txt)
    #[arg(short, long, value_name = "FILE")]
    pub resume: PathBuf,

    /// Path to file containing the job description
    #[arg(long, value_name = "FILE", conflicts_with = "job_text")]
    pub job_file: Option<PathBuf>,

    /// Job description given inline
    #[arg(long, value_name = "TEXT")]
    pub job_text: Option<String>,

    /// Print the raw analysis JSON instead of the dashboard
    #[arg(long)]
    pub json: bool,
}
