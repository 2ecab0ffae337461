use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toolshelf::{api, config::ServeConfig, export, tree_render};
use toolshelf_core::{Catalog, DownloadLink};

#[derive(Parser)]
#[command(name = "toolshelf")]
#[command(about = "Browsable catalog of penetration-testing tools and wordlists")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the catalog page, its wasm bundle and the tool files
    Serve {
        /// Address to bind [env: TOOLSHELF_HOST]
        #[arg(long)]
        host: Option<String>,

        /// Port for HTTP [env: TOOLSHELF_PORT]
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory with the downloadable tool files [env: TOOLSHELF_TOOLS_DIR]
        #[arg(long)]
        tools_dir: Option<PathBuf>,

        /// Directory with the wasm-pack output [env: TOOLSHELF_PKG_DIR]
        #[arg(long)]
        pkg_dir: Option<PathBuf>,
    },
    /// Print the catalog as a tree
    List,
    /// Print one tool's details
    Show {
        /// Exact tool name, e.g. `ncat`
        name: String,
    },
    /// Write a static copy of the page
    Export {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "toolshelf=debug,tower_http=debug".into()),
    );

    // stdout carries command output, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(config: ServeConfig) -> anyhow::Result<()> {
    let catalog = Catalog::embedded()?;
    tracing::info!(
        tools = catalog.tool_count(),
        tools_dir = %config.tools_dir.display(),
        pkg_dir = %config.pkg_dir.display(),
        "Starting Toolshelf server"
    );
    if !config.tools_dir.is_dir() {
        tracing::warn!(
            "Tools directory {} does not exist; downloads will fail",
            config.tools_dir.display()
        );
    }

    let app = api::create_router(api::AppState::new(catalog, &config));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("Toolshelf listening on http://{}", address);

    axum::serve(listener, app).await?;
    Ok(())
}

fn show(catalog: &Catalog, name: &str) -> anyhow::Result<()> {
    let tool = catalog
        .find_tool(name)
        .ok_or_else(|| anyhow::anyhow!("No tool named {:?}", name))?;

    println!("{}", tool.name);
    println!("  {}", tool.description);
    println!("  phase: {}", tool.phase);
    if !tool.tags.is_empty() {
        println!("  tags: {}", tool.tags.join(", "));
    }
    if let Some(note) = &tool.duplicate_of {
        println!("  also: {}", note);
    }
    match DownloadLink::for_file(tool.file.as_deref()) {
        Some(link) => println!("  download: {}", link.href),
        None => println!("  download: none"),
    }
    println!();
    println!("{}", tool.detail.trim());
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve {
            host,
            port,
            tools_dir,
            pkg_dir,
        }) => {
            let config = ServeConfig::from_env()?.with_overrides(host, port, tools_dir, pkg_dir);
            serve(config).await?;
        }
        Some(Commands::List) => {
            let catalog = Catalog::embedded()?;
            print!("{}", tree_render::render_tree(&catalog));
        }
        Some(Commands::Show { name }) => {
            let catalog = Catalog::embedded()?;
            show(&catalog, &name)?;
        }
        Some(Commands::Export { out }) => {
            let catalog = Catalog::embedded()?;
            let summary = export::export_site(&catalog, &out)?;
            for file in &summary.files {
                println!("wrote {}", file.display());
            }
            println!("{} tools exported", summary.tools);
        }
        None => {
            serve(ServeConfig::from_env()?).await?;
        }
    }

    Ok(())
}
