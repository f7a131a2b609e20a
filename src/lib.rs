// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use application::{DocumentLister, DocumentRepository, DocumentViewer, MeetingFinder};
use infrastructure::{Config, GranolaRepository};
use ports::TextPresenter;
use tracing::{debug, info};
use crate::cli::args::{Args, Command};

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting granolaview with arguments");

    // Initialize infrastructure
    let config = Config::resolve(args.config.as_deref()).context("Failed to load configuration")?;
    let repository = GranolaRepository::from_config(&config, args.credentials.clone())?;

    let output = execute(args.command, repository, &config).await?;
    println!("{}", output);
    Ok(())
}

/// Run one command against a repository and return what should be printed.
pub async fn execute<R: DocumentRepository>(
    command: Command,
    repository: R,
    config: &Config,
) -> Result<String> {
    let presenter = TextPresenter::new();
    let limits = &config.limits;

    match command {
        Command::List { limit, json } => {
            let lister = DocumentLister::new(repository);
            let limit = limit.unwrap_or(limits.default_list_limit);
            info!(limit, "Listing recent documents");
            let summaries = lister
                .list_recent(Some(limit))
                .await
                .context("Failed to list documents")?;

            if json {
                Ok(serde_json::to_string_pretty(&summaries)?)
            } else {
                Ok(presenter.render_summaries(&summaries))
            }
        }
        Command::Show {
            document_id,
            transcript,
        } => {
            let viewer = DocumentViewer::new(repository).with_lookup_window(limits.notes_lookup_window);
            info!(%document_id, transcript, "Showing document");
            let content = viewer.get_content(&document_id, transcript).await;
            Ok(presenter.render_content(content))
        }
        Command::Search { query, limit, json } => {
            let lister = DocumentLister::new(repository);
            let limit = limit.unwrap_or(limits.default_search_limit);
            info!(%query, limit, "Searching documents");
            let summaries = lister
                .search(&query, Some(limit))
                .await
                .context("Failed to search documents")?;

            if json {
                Ok(serde_json::to_string_pretty(&summaries)?)
            } else {
                Ok(presenter.render_search_results(&query, &summaries))
            }
        }
        Command::Latest { person, transcript } => {
            let finder = MeetingFinder::new(repository).with_search_window(limits.meeting_search_window);
            info!(%person, transcript, "Finding latest 1:1 meeting");
            let meeting = finder
                .find_latest_meeting_with(&person, transcript)
                .await
                .context("Failed to find meeting")?;
            Ok(presenter.render_meeting(&person, meeting))
        }
    }
}
