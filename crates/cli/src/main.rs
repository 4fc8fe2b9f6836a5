use area_domain::CliOverrides;
use clap::{Args, Parser, Subcommand};
use tracing::info;

mod bootstrap;
mod commands;
mod di;
mod render;

#[derive(Parser)]
#[command(name = "area-catalog")]
#[command(version)]
#[command(about = "AREA Catalog - browse services and automation templates")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Backend API base URL
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Bearer token for authenticated endpoints
    #[arg(long, env = "AREA_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search, filter and page through the catalog
    Browse(BrowseArgs),

    /// Manage actions
    #[command(subcommand)]
    Actions(CollectionCommand),

    /// Manage reactions
    #[command(subcommand)]
    Reactions(CollectionCommand),
}

#[derive(Args)]
pub struct BrowseArgs {
    /// Case-insensitive search across names, descriptions and tags
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only show services of this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only show popular services
    #[arg(long)]
    pub popular: bool,

    /// Page to display (1-indexed)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Items per page, overrides the configured value
    #[arg(long)]
    pub per_page: Option<usize>,
}

#[derive(Subcommand)]
pub enum CollectionCommand {
    /// List all entries
    List,

    /// Create an entry
    Create {
        /// Owning service id
        #[arg(long)]
        service_id: String,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Delete an entry by id
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let per_page = match &cli.command {
        Command::Browse(args) => args.per_page,
        _ => None,
    };
    let cli_overrides = CliOverrides {
        api_base_url: cli.api_url.clone(),
        items_per_page: per_page,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!(
        api = %config.api.base_url,
        "Starting AREA Catalog v{}",
        env!("CARGO_PKG_VERSION")
    );

    let repos = di::Repositories::new(&config)?;
    let use_cases = di::UseCases::new(&repos, cli.token);

    match cli.command {
        Command::Browse(args) => commands::browse(&use_cases, &config, &args).await,
        Command::Actions(cmd) => commands::run_collection(use_cases.actions.as_ref(), cmd).await,
        Command::Reactions(cmd) => commands::run_collection(use_cases.reactions.as_ref(), cmd).await,
    }
}
