use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use github_search_page::app;
use github_search_page::boundary::Screen;
use github_search_page::cli::Cli;
use github_search_page::config::Config;
use github_search_page::models::SearchResponse;
use github_search_page::terminal::{RenderOptions, render};
use github_search_page::RepositoryService;

#[tokio::main] // Marks the main function as asynchronous
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("github_search_page={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().with_api_url(cli.api_url);
    tracing::info!(api = %config.api_base_url, "using GitHub API");

    let service = RepositoryService::new(&config.api_base_url)
        .context("failed to build HTTP client")?;
    let options = RenderOptions {
        hyperlinks: cli.hyperlinks,
    };

    let Some(query) = cli.query else {
        return app::run_interactive(service, options).await;
    };

    let page = app::run_once(&service, &query, cli.per_page, cli.page - 1).await;

    if let Some(message) = page.notification_message() {
        eprintln!("Error while searching: {message}");
        std::process::exit(1);
    }

    if cli.json {
        let result = SearchResponse {
            total_count: page.total_count(),
            items: page.repositories().to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render(&Screen::Page(page.view()), options));
    }

    Ok(())
}
