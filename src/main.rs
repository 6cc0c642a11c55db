use anyhow::{Context, Result};
use clap::Parser;
use resume_builder::cli::Cli;
use resume_builder::{collect_record, ConfigManager, PromptIntake, ResumeGenerator};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigManager::load(cli.config.as_deref())?;
    cli.apply(&mut config.app);

    init_logging(&config.app.log_file, cli.verbose)?;
    info!("Starting resume builder");
    info!("Output directory: {}", config.app.output_dir.display());

    intro().await?;

    // Prompts go straight to the terminal; logs go to the log file
    let record = tokio::task::spawn_blocking(|| {
        let stdin = io::stdin();
        let mut intake = PromptIntake::new(stdin.lock(), io::stdout());
        collect_record(&mut intake)
    })
    .await
    .context("Intake task failed")??;

    let generator = ResumeGenerator::new(config.create_resume_config(&record.name));
    let output_path = generator
        .generate(&record)
        .await
        .context("Failed to create resume")?;

    println!(
        "\nYour resume has been successfully created and saved as {}!",
        output_path.display()
    );
    Ok(())
}

fn init_logging(log_file: &Path, verbose: bool) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Clear file on startup
        .open(log_file)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("resume_builder={}", default_level)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();

    Ok(())
}

async fn intro() -> Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "Welcome to the Rust Resume Builder!\n")?;
    tokio::time::sleep(Duration::from_secs(1)).await;
    writeln!(stdout, "Let's build your professional fresher resume.\n")?;
    stdout.flush()?;
    tokio::time::sleep(Duration::from_secs(1)).await;
    Ok(())
}
