//! SafeReport CLI: stage attachments and submit an anonymous report.
//!
//! Reads API_URL, MAX_FILE_SIZE_MB and friends from the environment (or `.env`).

use anyhow::Context;
use clap::{Parser, Subcommand};
use safereport_app::{
    init_tracing, AppState, IntakeOutcome, PreferenceStore, SubmissionController, SubmitOutcome,
    TerminalNotices,
};
use safereport_client::ReportClient;
use safereport_core::{
    directory, format_file_size, AppError, Config, FormField, Language, SelectedFile, Theme,
};
use safereport_processing::{content_type_for_extension, Sanitizer};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

#[derive(Parser)]
#[command(name = "safereport", about = "Anonymous report intake and submission")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sanitize attachments and submit a report
    Submit {
        /// Site identifier (see `safereport sites`)
        #[arg(long)]
        site: Option<String>,
        /// Department identifier (see `safereport departments`)
        #[arg(long)]
        department: Option<String>,
        /// Reporter name; omitted means anonymous
        #[arg(long)]
        name: Option<String>,
        /// Reporter email; omitted means not provided
        #[arg(long)]
        email: Option<String>,
        /// Report text
        #[arg(long)]
        message: Option<String>,
        /// Language: en or ar
        #[arg(long)]
        lang: Option<Language>,
        /// File to attach; repeat for several
        #[arg(long = "attach")]
        attachments: Vec<PathBuf>,
    },
    /// List sites
    Sites {
        #[arg(long)]
        lang: Option<Language>,
    },
    /// List departments
    Departments {
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Show or toggle the persisted theme
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },
    /// Write a sanitized copy of one file
    Sanitize {
        input: PathBuf,
        output: PathBuf,
        /// Declared media type; guessed from the extension when omitted
        #[arg(long)]
        media_type: Option<String>,
    },
}

#[derive(Subcommand)]
enum ThemeCommands {
    Show,
    Toggle,
}

async fn read_selected(path: &Path, media_type: Option<&str>) -> anyhow::Result<SelectedFile> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("Not a file path: {}", path.display()))?;
    let media_type = media_type
        .map(str::to_string)
        .or_else(|| content_type_for_extension(&name).map(str::to_string))
        .unwrap_or_else(|| FALLBACK_MEDIA_TYPE.to_string());

    Ok(SelectedFile::new(name, media_type, data))
}

async fn load_theme(config: &Config) -> Theme {
    match PreferenceStore::from_config(config) {
        Ok(store) => store.load_theme().await,
        Err(e) => {
            AppError::from(e).log("Using default theme");
            Theme::default()
        }
    }
}

fn print_entries(entries: &[directory::Entry]) {
    for entry in entries {
        println!("{}\t{}", entry.id, entry.name);
    }
}

#[allow(clippy::too_many_arguments)]
async fn submit(
    config: &Config,
    site: Option<String>,
    department: Option<String>,
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
    lang: Option<Language>,
    attachments: Vec<PathBuf>,
) -> anyhow::Result<()> {
    let language = lang.unwrap_or(config.default_language);
    let mut state = AppState::new(language, load_theme(config).await);
    for (field, value) in [
        (FormField::Site, site),
        (FormField::Department, department),
        (FormField::Name, name),
        (FormField::Email, email),
        (FormField::Message, message),
    ] {
        if let Some(value) = value {
            state.set_field(field, value);
        }
    }

    let transport = ReportClient::from_config(config)?;
    let controller = SubmissionController::from_config(
        config,
        Arc::new(Mutex::new(state)),
        Arc::new(transport),
        Arc::new(TerminalNotices),
    );

    if !attachments.is_empty() {
        let mut files = Vec::with_capacity(attachments.len());
        for path in &attachments {
            files.push(read_selected(path, None).await?);
        }
        if let IntakeOutcome::Failed { .. } = controller.intake(files).await {
            anyhow::bail!("Attachments could not be processed");
        }

        let state = controller.state().lock().await;
        for attachment in state.attachments.iter() {
            println!(
                "staged {} ({}, {:?})",
                attachment.name,
                format_file_size(attachment.size as u64),
                attachment.level
            );
        }
    }

    match controller.submit().await {
        SubmitOutcome::Delivered => Ok(()),
        other => anyhow::bail!("Report was not delivered: {:?}", other),
    }
}

async fn sanitize(
    config: &Config,
    input: &Path,
    output: &Path,
    media_type: Option<String>,
) -> anyhow::Result<()> {
    let file = read_selected(input, media_type.as_deref()).await?;
    let original_size = file.size();

    let sanitized = Sanitizer::from_config(config)
        .sanitize(file)
        .await
        .context("Sanitization failed")?;
    tokio::fs::write(output, &sanitized.data)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} ({}): {} -> {} [{:?}]",
        sanitized.name,
        sanitized.media_type,
        format_file_size(original_size as u64),
        format_file_size(sanitized.data.len() as u64),
        sanitized.level
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env().map_err(|e| {
        let err = AppError::Config(format!("{:#}", e));
        err.log("Invalid configuration");
        err
    })?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Submit {
            site,
            department,
            name,
            email,
            message,
            lang,
            attachments,
        } => {
            submit(
                &config,
                site,
                department,
                name,
                email,
                message,
                lang,
                attachments,
            )
            .await?;
        }
        Commands::Sites { lang } => {
            print_entries(directory::sites(lang.unwrap_or(config.default_language)));
        }
        Commands::Departments { lang } => {
            print_entries(directory::departments(lang.unwrap_or(config.default_language)));
        }
        Commands::Theme { action } => {
            let store = PreferenceStore::from_config(&config).map_err(AppError::from)?;
            match action {
                ThemeCommands::Show => println!("{}", store.load_theme().await),
                ThemeCommands::Toggle => {
                    let theme = store.load_theme().await.toggle();
                    store.save_theme(theme).await.map_err(AppError::from)?;
                    println!("{}", theme);
                }
            }
        }
        Commands::Sanitize {
            input,
            output,
            media_type,
        } => sanitize(&config, &input, &output, media_type).await?,
    }

    Ok(())
}
