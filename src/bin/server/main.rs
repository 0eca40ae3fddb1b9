use anyhow::anyhow;
use clap::{Parser, Subcommand};
use fieldstaff::core::application::{Application, ApplicationServices};
use fieldstaff::core::config::Config;
use fieldstaff::domain::staffing::{self, StaffingService};
use fieldstaff::inbound::http::router;
use fieldstaff::outbound::directory::adapter::{DirectoryAdapter, NewDirectoryAdapterParams};
use std::process::exit;
use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

type ApplicationAlias = Application<staffing::Service<DirectoryAdapter>>;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long)]
    config_path: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API.
    Run,
    /// Print the staffing dashboard once as JSON.
    Summary,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = start(cli).await {
        error!("Error: {:#?}", e);
        exit(1);
    }
}

async fn start(cli: Cli) -> anyhow::Result<(), anyhow::Error> {
    let config = Config::parse(cli.config_path)?;
    if !config.is_valid() {
        return Err(anyhow!("config is not valid"));
    }

    let application = create_application(config)?;

    match cli.command {
        None => Ok(()),
        Some(subcommand) => match subcommand {
            Commands::Run => run_server(application).await,
            Commands::Summary => print_summary(application).await,
        },
    }
}

fn create_application(config: Config) -> Result<ApplicationAlias, anyhow::Error> {
    tracing::debug!("creating directory adapter");
    let directory = DirectoryAdapter::new(NewDirectoryAdapterParams {
        base_url: config.directory.base_url.clone(),
    })?;

    let staffing_service = staffing::Service::new(directory);

    Ok(Application::new(config, staffing_service))
}

async fn run_server(app: ApplicationAlias) -> anyhow::Result<()> {
    let listen_address = app.config().listen_address;
    let router = router(app);

    let listener = tokio::net::TcpListener::bind(listen_address.as_str())
        .await
        .map_err(|_| anyhow!("server failed to bind {listen_address}"))?;

    tracing::debug!(
        "listening on {}",
        listener
            .local_addr()
            .map_err(|_| anyhow!("failed to get local_addr"))?
    );

    axum::serve(listener, router)
        .await
        .map_err(|_| anyhow!("failed to start server"))
}

async fn print_summary(app: ApplicationAlias) -> anyhow::Result<()> {
    let result = app.staffing_service().dashboard_summary().await?;

    println!("{}", serde_json::to_string_pretty(&result.summary)?);

    Ok(())
}
