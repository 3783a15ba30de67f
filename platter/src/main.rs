use anyhow::{bail, Context};
use clap::Parser;
use platter_common::{present, ActionKind, PageContext, ViewMode};
use platter_core::actions::{ActionDispatcher, ActionOutcome, StaticIdentity};
use platter_core::collection::{CollectionClient, CollectionLookup};
use platter_core::config::Config;
use platter_core::discogs::DiscogsClient;
use platter_core::normalize::normalize_release;
use platter_core::search::{search_and_normalize, SearchQuery};
use platter_ui::ResultCard;
use std::sync::Arc;
use tracing::info;
mod cli;
mod handlers;
mod output;
use cli::{Cli, Command};
use output::Viewer;

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // stdout carries the rendered results
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn discogs_client(config: &Config) -> anyhow::Result<DiscogsClient> {
    let Some(auth) = config.discogs_auth() else {
        bail!("No Discogs credentials. Set PLATTER_DISCOGS_TOKEN or discogs_token in config.yaml");
    };
    Ok(DiscogsClient::new(auth))
}

fn dispatcher(config: &Config) -> ActionDispatcher {
    let lookup: Arc<dyn CollectionLookup> = match &config.collection_server {
        Some(server) => Arc::new(CollectionClient::new(server)),
        None => Arc::new(handlers::UnconfiguredLookup),
    };
    ActionDispatcher::new(
        Arc::new(StaticIdentity(config.user_id.clone())),
        lookup,
        Arc::new(handlers::ConsoleSink),
        Arc::new(handlers::ConsoleRouter),
    )
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    match cli.command {
        Command::Search {
            query,
            sort,
            view,
            page,
            html,
        } => {
            let client = discogs_client(&config)?;
            let mut query = SearchQuery::new(query).sorted_by(sort);
            query.per_page = config.per_page;
            query.format = config.format_filter.clone();
            query.page = page.max(1);
            let results = search_and_normalize(&client, &query)
                .await
                .with_context(|| format!("Search for '{}' failed", query.query))?;
            let viewer = Viewer {
                viewer_id: config.user_id.clone(),
                owner_id: None,
            };
            if html {
                println!("{}", output::render_results_html(&results, view, &viewer));
            } else {
                print!("{}", output::format_results(&results, view, &viewer));
            }
        }
        Command::Release {
            id,
            page,
            owner,
            html,
        } => {
            let client = discogs_client(&config)?;
            let release = client
                .get_release(&id)
                .await
                .with_context(|| format!("Failed to fetch release {id}"))?;
            let (result, tracklist) = normalize_release(&release);
            let viewer = Viewer {
                viewer_id: config.user_id.clone(),
                owner_id: owner,
            };
            if html {
                let card = ResultCard {
                    released_id: release.id.clone(),
                    cover_url: release.thumb.clone().or(release.cover_image.clone()),
                    result,
                };
                println!(
                    "{}",
                    output::render_release_html(card, tracklist, page, &viewer)
                );
            } else {
                let plan = present(
                    &result,
                    tracklist.as_ref(),
                    ViewMode::Detail,
                    page,
                    viewer.viewer_id.as_deref(),
                    viewer.owner_id.as_deref(),
                );
                print!("{}", output::format_card(&release.id, &result, &plan));
            }
        }
        Command::Add { released_id } => {
            report(dispatcher(&config).invoke(ActionKind::Add, &released_id).await)?;
        }
        Command::Remove { released_id } => {
            report(
                dispatcher(&config)
                    .invoke_for_page(PageContext::Collection, &released_id)
                    .await,
            )?;
        }
    }
    Ok(())
}

fn report(outcome: ActionOutcome) -> anyhow::Result<()> {
    match outcome {
        ActionOutcome::Submitted(_) => Ok(()),
        ActionOutcome::MissingReleaseId => bail!("A release id is required"),
        ActionOutcome::Redirected => bail!("Sign-in required"),
        ActionOutcome::Aborted(failure) => Err(failure).context("Collection lookup failed"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    configure_logging();
    let cli = Cli::parse();
    let config = Config::load();
    info!("Loaded config from {}", config.config_dir.display());
    run(cli, config).await
}
