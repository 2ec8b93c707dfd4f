use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use profeed::aggregate::Controller;
use profeed::config::Config;
use profeed::gateway::HttpGateway;
use profeed::trace::init_tracing;

/// Fetch a user profile and the user's posts, aggregated into one state.
#[derive(Debug, Parser)]
#[command(name = "profeed", version, about)]
struct Cli {
    /// User id to aggregate.
    #[arg(long, default_value_t = 1)]
    user_id: i64,

    /// Override the API base URL from config.
    #[arg(long)]
    base_url: Option<String>,

    /// Path to a config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate()?;
    }

    let gateway = HttpGateway::new(&config.api).context("failed to build HTTP client")?;
    let controller = Arc::new(Controller::new(Arc::new(gateway)));

    // Reference state sink: log every observed transition.
    let mut updates = controller.subscribe();
    let sink = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            info!(
                loading = state.loading,
                has_user = state.user.is_some(),
                posts = state.posts.len(),
                error = state.error.as_deref().unwrap_or(""),
                "state"
            );
        }
    });

    controller.fetch_user_data(cli.user_id).await;
    let state = controller.snapshot();

    // Dropping the controller closes the watch channel and ends the sink.
    drop(controller);
    sink.await.context("state sink task failed")?;

    if let Some(user) = &state.user {
        println!("{} <{}>", user.name, user.email);
        for post in &state.posts {
            println!("  [{}] {}", post.id, post.title);
        }
    }

    if let Some(message) = &state.error {
        eprintln!("error: {message}");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
