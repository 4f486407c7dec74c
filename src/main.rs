mod api;
mod dashboard;
mod interactive;
mod models;
mod session;
mod utils;

use std::io;

use clap::Parser;
use colored::Colorize;
use eyre::Result;
use log::{debug, info};

use crate::api::client::ApiClient;
use crate::dashboard::metrics::DashboardView;
use crate::dashboard::render::{DashboardRenderer, render_health, render_upload_report};
use crate::models::diagnostics::{HealthStatus, UploadTestReport};
use crate::models::resume::ResumeFile;
use crate::session::{AnalysisSession, View};
use crate::utils::cli::{AnalyzeArgs, Args, Command};
use crate::utils::config::{Config, config};
use crate::utils::input;
use crate::utils::log::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    info!(
        "starting rolefit {}",
        format!("v{}", env!("CARGO_PKG_VERSION")).magenta()
    );

    let config: Config = config(args.config)?;
    let client = ApiClient::new(&config.api);
    info!("using analysis API at {}", client.base_url());

    let renderer = DashboardRenderer::new(&config.display, !args.no_animate);

    match args.command {
        Command::Analyze(ref analyze) => run_analyze(&client, &renderer, analyze).await,
        Command::Interactive => run_interactive(&client, &renderer).await,
        Command::UploadTest { ref file } => {
            let file = ResumeFile::from_path(file).await?;
            file.validate()?;
            let value = client.test_file_upload(&file).await?;
            debug!("upload test response: {}", value);
            print!("{}", render_upload_report(&UploadTestReport::from_value(&value)));
            Ok(())
        }
        Command::Health => {
            let value = client.check_health().await?;
            debug!("health response: {}", value);
            print!("{}", render_health(&HealthStatus::from_value(&value)));
            Ok(())
        }
    }
}

async fn run_analyze(
    client: &ApiClient,
    renderer: &DashboardRenderer,
    args: &AnalyzeArgs,
) -> Result<()> {
    let mut session = AnalysisSession::new();
    session.select_file(ResumeFile::from_path(&args.resume).await?);
    session.set_job_description(input::job_description(args).await?);

    session.submit(client).await?;

    if let View::Results(result) = session.view() {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            renderer
                .show(&DashboardView::from_result(&result), &mut io::stdout())
                .await?;
        }
    }

    Ok(())
}

async fn run_interactive(client: &ApiClient, renderer: &DashboardRenderer) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    interactive::run(client, renderer, &mut input, &mut output).await
}
