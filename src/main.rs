use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use canvass::{catalog::Catalog, web};

#[derive(Parser)]
#[command(name = "canvass")]
#[command(about = "Server-rendered survey application")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the survey server
    Serve {
        /// Port for the HTTP server
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Survey catalog TOML file (built-in surveys if omitted)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Validate a survey catalog file and exit
    Check {
        /// Survey catalog TOML file
        catalog: PathBuf,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "canvass=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(port: u16, catalog_path: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = match catalog_path {
        Some(path) => Catalog::load(&path)?,
        None => Catalog::builtin(),
    };
    tracing::info!("loaded catalog with {} surveys", catalog.len());

    let app = web::create_router(catalog)?;

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("canvass listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port, catalog }) => serve(port, catalog).await,
        Some(Commands::Check { catalog }) => {
            let loaded = Catalog::load(&catalog)?;
            println!("{}: {} surveys, ok", catalog.display(), loaded.len());
            Ok(())
        }
        None => serve(3000, None).await,
    }
}
