use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use configuration::{LogLevel, Settings};
use dataset::Dataset;
use query_engine::{QueryEngine, QueryParams};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use web_server::AppState;

/// The main entry point for the remote-area schools browser.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve(ServeArgs::default()));

    let mut settings = configuration::load_config().context("Failed to load configuration")?;
    cli.common.apply(&mut settings);
    if let Commands::Serve(args) = &command {
        args.apply(&mut settings);
    }

    // Keep the guard alive so the file writer flushes on exit.
    let _log_guard = configuration::init_tracing(&settings.logging)?;

    // Execute the appropriate command
    match command {
        Commands::Serve(_) => handle_serve(settings).await,
        Commands::Query(args) => handle_query(args, &settings),
        Commands::Facets(args) => handle_facets(args, &settings),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Browse the remote-area elementary and junior-high schools dataset.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Defaults to `serve`.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Overrides shared by every command.
#[derive(Args)]
struct CommonArgs {
    /// Path to the JSON dataset (overrides `dataset.path`).
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Log level when RUST_LOG is not set (overrides `logging.level`).
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,
}

impl CommonArgs {
    fn apply(&self, settings: &mut Settings) {
        if let Some(path) = &self.data {
            settings.dataset.path = path.clone();
        }
        if let Some(level) = self.log_level {
            settings.logging.level = level;
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server.
    Serve(ServeArgs),
    /// Run a list query and print the results as a table.
    Query(QueryArgs),
    /// Print the year, county, and district menus.
    Facets(FacetsArgs),
}

#[derive(Args, Default)]
struct ServeArgs {
    /// Address to bind (overrides `server.host`).
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (overrides `server.port`).
    #[arg(long)]
    port: Option<u16>,
}

impl ServeArgs {
    fn apply(&self, settings: &mut Settings) {
        if let Some(host) = self.host {
            settings.server.host = host.to_string();
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
    }
}

#[derive(Args)]
struct QueryArgs {
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    county: Option<String>,
    #[arg(long)]
    district: Option<String>,
    /// Substring of the school name (case-sensitive).
    #[arg(long)]
    keyword: Option<String>,
    #[arg(long)]
    min_students: Option<String>,
    #[arg(long)]
    max_students: Option<String>,
    /// year, county, or students.
    #[arg(long)]
    sort: Option<String>,
    /// asc or desc.
    #[arg(long)]
    order: Option<String>,
}

impl From<QueryArgs> for QueryParams {
    fn from(args: QueryArgs) -> Self {
        QueryParams {
            year: args.year,
            county: args.county,
            district: args.district,
            keyword: args.keyword,
            min_students: args.min_students,
            max_students: args.max_students,
            sort: args.sort,
            order: args.order,
        }
    }
}

#[derive(Args)]
struct FacetsArgs {
    /// Also list the districts of this county.
    #[arg(long)]
    county: Option<String>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn load_dataset(settings: &Settings) -> Dataset {
    let dataset = Dataset::new(dataset::load_schools(&settings.dataset.path));
    tracing::info!(
        records = dataset.len(),
        years = dataset.years().len(),
        counties = dataset.counties().len(),
        "Dataset ready."
    );
    dataset
}

async fn handle_serve(settings: Settings) -> anyhow::Result<()> {
    tracing::info!(
        dataset = %settings.dataset.path.display(),
        display_limit = settings.query.display_limit,
        "Starting remote-schools server."
    );

    let host: IpAddr = settings
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid server.host: {}", settings.server.host))?;
    let addr = SocketAddr::new(host, settings.server.port);

    let dataset = load_dataset(&settings);
    let engine = QueryEngine::new(settings.query.clone());

    web_server::run_server(addr, AppState::new(dataset, engine)).await
}

fn handle_query(args: QueryArgs, settings: &Settings) -> anyhow::Result<()> {
    let dataset = load_dataset(settings);
    let engine = QueryEngine::new(settings.query.clone());
    let params = QueryParams::from(args);
    let outcome = engine.run(&dataset, &params);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["年度", "縣市", "鄉鎮", "代碼", "校名", "總人數"]);
    for s in &outcome.schools {
        table.add_row(vec![
            s.year.clone(),
            s.county.clone(),
            s.district.clone(),
            s.code.clone(),
            s.name.clone(),
            s.student_total().to_string(),
        ]);
    }

    println!("{table}");
    println!(
        "找到 {} 筆資料 (顯示 {} 筆)",
        outcome.total_matches,
        outcome.schools.len()
    );
    Ok(())
}

fn handle_facets(args: FacetsArgs, settings: &Settings) -> anyhow::Result<()> {
    let dataset = load_dataset(settings);

    println!("學年度: {}", dataset.years().join(", "));
    println!("縣市: {}", dataset.counties().join(", "));
    if let Some(county) = args.county.as_deref() {
        println!("{} 鄉鎮區: {}", county, dataset.districts_for(county).join(", "));
    }
    Ok(())
}
