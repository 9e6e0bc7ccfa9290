use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    view::{page_view, Route},
    CampaignsController, ClientError, HttpCampaignService, StaticTokenProvider,
};
use shared::domain::CampaignId;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod render;

use config::load_settings;
use render::{render_page, ConsoleNotifier};

#[derive(Parser, Debug)]
#[command(name = "campaigns", about = "Manage and monitor your outreach campaigns")]
struct Cli {
    /// Config file; defaults to ./campaigns.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long)]
    token: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all campaigns.
    List,
    /// Start, pause or resume depending on the campaign's current state.
    Toggle { id: String },
    Start { id: String },
    Pause { id: String },
    Resume { id: String },
    Delete { id: String },
    /// Print the edit route for a campaign.
    Edit { id: String },
    /// Print the create route.
    Create,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        settings.api_base_url = url;
    }
    if let Some(token) = cli.token {
        settings.auth_token = Some(token);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(route) = route_for(&cli.command) {
        println!("{}", route.path());
        return Ok(());
    }

    let service = HttpCampaignService::new(&settings.api_base_url, settings.request_timeout())
        .context("failed to build campaign service client")?;
    info!(base_url = %service.base_url(), "using campaign service");

    let controller = CampaignsController::new(
        Arc::new(service),
        Arc::new(StaticTokenProvider::new(settings.auth_token.clone())),
        Arc::new(ConsoleNotifier),
    );

    controller
        .fetch_campaigns()
        .await
        .map_err(explain_client_error)
        .context("failed to load campaigns")?;

    match cli.command {
        Command::List | Command::Edit { .. } | Command::Create => {}
        Command::Toggle { id } => {
            let report = controller
                .toggle(&CampaignId::new(id))
                .await
                .map_err(explain_client_error)?;
            info!(action = ?report.action, outcome = ?report.outcome, "toggle handled");
        }
        Command::Start { id } => {
            let outcome = controller
                .start(&CampaignId::new(id))
                .await
                .map_err(explain_client_error)?;
            info!(?outcome, "start handled");
        }
        Command::Pause { id } => {
            let outcome = controller
                .pause(&CampaignId::new(id))
                .await
                .map_err(explain_client_error)?;
            info!(?outcome, "pause handled");
        }
        Command::Resume { id } => {
            let outcome = controller
                .resume(&CampaignId::new(id))
                .await
                .map_err(explain_client_error)?;
            info!(?outcome, "resume handled");
        }
        Command::Delete { id } => {
            let outcome = controller
                .delete(&CampaignId::new(id))
                .await
                .map_err(explain_client_error)?;
            info!(?outcome, "delete handled");
        }
    }

    print!("{}", render_page(&page_view(&controller.snapshot().await)));
    Ok(())
}

/// Commands answered locally, without touching the campaign service.
fn route_for(command: &Command) -> Option<Route> {
    match command {
        Command::Edit { id } => Some(Route::Edit(CampaignId::new(id.as_str()))),
        Command::Create => Some(Route::Create),
        _ => None,
    }
}

fn explain_client_error(err: ClientError) -> anyhow::Error {
    if err.is_auth_failure() {
        anyhow::Error::new(err)
            .context("not signed in: set CAMPAIGNS_TOKEN, auth_token in campaigns.toml, or pass --token")
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use shared::error::ErrorCode;

    use super::*;

    #[test]
    fn edit_and_create_resolve_to_routes_without_the_service() {
        let cli = Cli::try_parse_from(["campaigns", "edit", "cmp_7"]).expect("parse");
        assert_eq!(
            route_for(&cli.command).map(|route| route.path()).as_deref(),
            Some("/campaigns/edit/cmp_7")
        );

        let cli = Cli::try_parse_from(["campaigns", "create"]).expect("parse");
        assert_eq!(
            route_for(&cli.command).map(|route| route.path()).as_deref(),
            Some("/campaigns/create-campaign")
        );
    }

    #[test]
    fn action_commands_go_to_the_service() {
        for args in [
            vec!["campaigns", "list"],
            vec!["campaigns", "toggle", "c1"],
            vec!["campaigns", "delete", "c1"],
        ] {
            let cli = Cli::try_parse_from(args).expect("parse");
            assert!(route_for(&cli.command).is_none());
        }
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "campaigns",
            "--api-url",
            "http://localhost:9000/api",
            "--token",
            "tok",
            "pause",
            "c9",
        ])
        .expect("parse");

        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9000/api"));
        assert_eq!(cli.token.as_deref(), Some("tok"));
        assert!(matches!(cli.command, Command::Pause { ref id } if id == "c9"));
    }

    #[test]
    fn auth_failures_carry_a_sign_in_hint() {
        let err = explain_client_error(ClientError::AuthenticationRequired);
        assert!(err.to_string().contains("CAMPAIGNS_TOKEN"));

        let err = explain_client_error(ClientError::Remote {
            code: ErrorCode::Unauthorized,
            status: 401,
            message: "expired".to_string(),
        });
        assert!(err.to_string().contains("not signed in"));

        let err = explain_client_error(ClientError::Remote {
            code: ErrorCode::Internal,
            status: 500,
            message: "boom".to_string(),
        });
        assert!(!err.to_string().contains("not signed in"));
    }
}
