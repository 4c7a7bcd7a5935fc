use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use admin::{Admin, AdminConfig};
use anyhow::{anyhow, Context, Result};
use api_ingress::{ApiIngress, ApiIngressConfig};
use clap::{Parser, Subcommand};
use db::{ConnectOpts, DbHandle};
use leads::Leads;
use mimalloc::MiMalloc;
use runtime::{AppConfig, AppConfigProvider, CliArgs};
use tokio_util::sync::CancellationToken;
use url::Url;

mod shutdown;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const MEMORY_DSN: &str = "sqlite::memory:";
const DEFAULT_DSN: &str = "sqlite://database/leads.db";
const DEFAULT_DRAIN_SECS: u64 = 30;

/// Expand a sqlite DSN into an absolute-path DSN using a base directory.
/// In-memory DSNs are returned unchanged.
fn absolutize_sqlite_dsn(dsn: &str, base_dir: &Path) -> Result<String> {
    if dsn.eq_ignore_ascii_case(MEMORY_DSN) || dsn.eq_ignore_ascii_case("sqlite://:memory:") {
        return Ok(MEMORY_DSN.to_string());
    }
    let db_path = dsn
        .strip_prefix("sqlite://")
        .ok_or_else(|| anyhow!("DSN must start with sqlite:// (got: {})", dsn))?;

    let (path_str, query) = match db_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (db_path, None),
    };

    let mut p = PathBuf::from(path_str);
    if p.as_os_str().is_empty() {
        return Err(anyhow!("Empty SQLite path in DSN"));
    }
    if p.is_relative() {
        p = base_dir.join(p);
    }

    let mut out = String::from("sqlite://");
    out.push_str(&p.to_string_lossy().replace('\\', "/"));
    if let Some(q) = query {
        out.push('?');
        out.push_str(q);
    }
    Ok(out)
}

/// Marine leads server - lead intake API and admin panel
#[derive(Parser)]
#[command(name = "leads-server")]
#[command(about = "Marine leads server - lead intake API and admin panel")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory SQLite database
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
        mock: cli.mock,
    };

    // home_dir is normalized and created while loading
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    let logging_config = config.logging.clone().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, Path::new(&config.server.home_dir));
    tracing::info!(profile = ?config.server.profile, "Leads server starting");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config, args).await,
        Commands::Check => check_config(config, args),
    }
}

/// DSN actually used: `--mock` forces in-memory SQLite, relative sqlite paths
/// are resolved against `server.home_dir`.
fn effective_dsn(config: &AppConfig, args: &CliArgs) -> Result<String> {
    if args.mock {
        return Ok(MEMORY_DSN.to_string());
    }
    // No `database` section: fall back to the default file database.
    let url = match &config.database {
        Some(db_config) => db_config.url.trim().to_string(),
        None => DEFAULT_DSN.to_string(),
    };
    if url.is_empty() {
        return Err(anyhow!("Database URL not configured"));
    }
    if url.eq_ignore_ascii_case(MEMORY_DSN) || url.eq_ignore_ascii_case("sqlite://:memory:") {
        return Ok(MEMORY_DSN.to_string());
    }

    let raw = url.as_str();
    let parsed = Url::parse(raw).map_err(|e| {
        anyhow!(
            "Invalid database DSN '{}': {}",
            db::redact_credentials_in_dsn(raw),
            e
        )
    })?;
    match parsed.scheme() {
        "sqlite" => absolutize_sqlite_dsn(raw, Path::new(&config.server.home_dir)),
        "postgres" | "postgresql" => Ok(raw.to_string()),
        other => Err(anyhow!("Unsupported database type: {}", other)),
    }
}

fn bind_addr(config: &AppConfig) -> Result<SocketAddr> {
    let raw = format!("{}:{}", config.server.host, config.server.port);
    raw.parse()
        .with_context(|| format!("invalid bind address '{raw}'"))
}

async fn run_server(config: AppConfig, args: CliArgs) -> Result<()> {
    let addr = bind_addr(&config)?;
    let provider = AppConfigProvider::new(config.clone());
    let ingress_cfg: ApiIngressConfig = provider.module_config("api_ingress")?;
    let admin_cfg: AdminConfig = provider.module_config("admin")?;

    let dsn = effective_dsn(&config, &args)?;
    let db_config = config.database.clone();
    let connect_opts = ConnectOpts {
        max_conns: db_config.as_ref().and_then(|d| d.max_conns),
        acquire_timeout: Some(Duration::from_secs(5)),
        sqlite_busy_timeout: db_config
            .as_ref()
            .and_then(|d| d.busy_timeout_ms)
            .map(|ms| Duration::from_millis(ms as u64)),
        create_sqlite_dirs: true,
    };

    tracing::info!("Connecting to database: {}", db::redact_credentials_in_dsn(&dsn));
    let db = DbHandle::connect(&dsn, connect_opts)
        .await
        .context("database connection failed")?;
    tracing::info!("Connected DB backend: {:?}", db.engine());

    Leads::migrate(&db).await?;
    let leads = Leads::new(&db);
    let admin = Admin::new(&admin_cfg, config.server.profile, leads.client())?;

    let ingress = Arc::new(ApiIngress::new(ingress_cfg));
    let routes = leads.register_rest(axum::Router::new(), &ingress);
    let routes = admin.register_rest(routes);
    let router = ingress.build_router(routes);

    let cancel = CancellationToken::new();
    shutdown::cancel_on_signal(cancel.clone());

    let mut server = tokio::spawn({
        let ingress = ingress.clone();
        let cancel = cancel.clone();
        async move { ingress.serve(router, addr, cancel).await }
    });

    tokio::select! {
        joined = &mut server => {
            joined.context("server task panicked")??;
            db.close().await;
            return Ok(());
        }
        _ = cancel.cancelled() => {}
    }

    let drain = match config.server.timeout_sec {
        0 => DEFAULT_DRAIN_SECS,
        secs => secs,
    };
    match tokio::time::timeout(Duration::from_secs(drain), server).await {
        Ok(joined) => joined.context("server task panicked")??,
        Err(_) => tracing::warn!(drain_secs = drain, "graceful shutdown timed out"),
    }

    db.close().await;
    tracing::info!("Leads server stopped");
    Ok(())
}

/// Validate everything `run` would need without binding or connecting.
fn check_config(config: AppConfig, args: CliArgs) -> Result<()> {
    tracing::info!("Checking configuration...");

    bind_addr(&config)?;
    let dsn = effective_dsn(&config, &args)?;
    let engine = DbHandle::detect(&dsn)?;

    let provider = AppConfigProvider::new(config.clone());
    let _: ApiIngressConfig = provider.module_config("api_ingress")?;
    let admin_cfg: AdminConfig = provider.module_config("admin")?;
    admin_cfg
        .resolve(config.server.profile)
        .context("admin configuration invalid")?;

    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("Database engine: {:?}", engine);
    println!("{}", config.to_yaml()?);
    Ok(())
}
