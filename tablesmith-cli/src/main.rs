//! Tablesmith CLI Tool
//!
//! Command-line interface for validating model declarations, previewing the DDL they
//! produce and provisioning it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process;
use tablesmith::config::DatabaseConfig;
use tablesmith::{Dialect, ModelDef};
use tablesmith_cli::{commands, model_file};

#[derive(Parser)]
#[command(name = "tablesmith")]
#[command(about = "Schema provisioning for Tablesmith models")]
#[command(version)]
struct Cli {
    /// Model declarations (TOML)
    #[arg(long, default_value = "models.toml")]
    models: PathBuf,

    /// SQL dialect: sqlite, postgres or mysql (default: from config)
    #[arg(long)]
    dialect: Option<Dialect>,

    /// Database connection URL
    #[arg(long)]
    database_url: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check model declarations without touching a database
    Validate,

    /// Print the statements that would be issued against an empty database
    Plan,

    /// Print the table descriptors of every model as JSON
    Inspect,

    /// Create tables, foreign keys and indexes in the database
    #[cfg(feature = "postgres")]
    Apply,
}

fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&cli) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the command ran but found problems
fn run(cli: &Cli) -> Result<bool> {
    let config = load_config();
    let dialect = cli.dialect.unwrap_or(config.dialect);
    let models = model_file::load_models(&cli.models)?;

    match cli.command {
        Commands::Validate => Ok(handle_validate(&models, &cli.models, cli.quiet)),
        Commands::Plan => handle_plan(&models, dialect),
        Commands::Inspect => {
            println!("{}", commands::inspect(&models)?);
            Ok(true)
        }
        #[cfg(feature = "postgres")]
        Commands::Apply => {
            let url = database_url(cli.database_url.as_deref(), &config);
            handle_apply(&models, dialect, &url, cli.quiet)
        }
    }
}

fn load_config() -> DatabaseConfig {
    match DatabaseConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Falling back to default database settings: {}", e);
            DatabaseConfig::default()
        }
    }
}

/// Flag, then `TABLESMITH_DATABASE_URL` / `DATABASE_URL`, then config
#[cfg_attr(not(feature = "postgres"), allow(dead_code))]
fn database_url(flag: Option<&str>, config: &DatabaseConfig) -> String {
    flag.map(str::to_string)
        .or_else(|| std::env::var("TABLESMITH_DATABASE_URL").ok())
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| config.url.clone())
}

fn handle_validate(models: &[ModelDef], path: &Path, quiet: bool) -> bool {
    let issues = commands::validation_report(models);
    if issues.is_empty() {
        if !quiet {
            println!(
                "{} {} model(s) in {} are valid",
                "✓".green(),
                models.len(),
                path.display()
            );
        }
        return true;
    }

    eprintln!("{} {} invalid model field(s):", "✗".red(), issues.len());
    for issue in &issues {
        eprintln!("  - {}", issue);
    }
    false
}

fn handle_plan(models: &[ModelDef], dialect: Dialect) -> Result<bool> {
    let statements = commands::plan(models, dialect)
        .with_context(|| format!("cannot plan schema for {}", dialect))?;
    for statement in statements {
        println!("{}", statement);
    }
    Ok(true)
}

#[cfg(feature = "postgres")]
fn handle_apply(models: &[ModelDef], dialect: Dialect, url: &str, quiet: bool) -> Result<bool> {
    use tablesmith::connection::connect;
    use tablesmith::{MayPostgresExecutor, SchemaManager};

    if dialect != Dialect::Postgres {
        anyhow::bail!("apply supports the postgres dialect only (got {})", dialect);
    }

    let client = connect(url).context("Error connecting to database")?;
    let manager = SchemaManager::new(MayPostgresExecutor::new(client), dialect);
    manager.validate_and_create(models)?;

    if !quiet {
        println!("{} Provisioned {} model(s)", "✓".green(), models.len());
    }
    Ok(true)
}
