//! oxide-mysql-lex CLI
//!
//! Command-line tool that tokenizes MySQL-dialect SQL.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::FmtSubscriber;

use oxide_mysql_scanner::{BuiltinCharsets, CharsetInfo, CharsetRegistry, Lexer};

use render::Format;

/// Tokenize MySQL-dialect SQL.
#[derive(Parser)]
#[command(name = "oxide-mysql-lex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL text to scan (reads --file or stdin if omitted).
    sql: Option<String>,

    /// Read SQL from this file.
    #[arg(short, long, conflicts_with = "sql")]
    file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// JSON configuration file for the lexer.
    #[arg(short, long, env = "OXIDE_MYSQL_LEX_CONFIG")]
    config: Option<PathBuf>,

    /// Connection charset.
    #[arg(long, env = "OXIDE_MYSQL_LEX_CHARSET")]
    charset: Option<String>,

    /// Connection collation (defaults to the charset's own).
    #[arg(long, env = "OXIDE_MYSQL_LEX_COLLATION")]
    collation: Option<String>,

    /// Scan in prepared-statement mode.
    #[arg(long)]
    prepare: bool,

    /// Print each statement's text instead of tokens.
    #[arg(long)]
    statements: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = render::load_config(cli.config.as_deref())?;
    if let Some(charset) = cli.charset {
        let collation = cli.collation.or_else(|| {
            BuiltinCharsets::new()
                .resolve(&charset)
                .map(|info| info.collation)
        });
        config.charset = CharsetInfo::new(charset, collation.unwrap_or_default());
    } else if let Some(collation) = cli.collation {
        config.charset.collation = collation;
    }
    if cli.prepare {
        config.prepare = true;
    }
    debug!(?config, "lexer configuration");

    let sql = render::read_source(cli.sql, cli.file.as_deref())?;
    let mut lexer = Lexer::with_config(&sql, config);

    if cli.statements {
        for stmt in render::statements(&mut lexer) {
            println!("{stmt}");
        }
    } else {
        let tokens = lexer.tokenize();
        info!(count = tokens.len(), "scanned tokens");
        println!("{}", render::render_tokens(&tokens, cli.format)?);
    }

    for err in lexer.errors() {
        warn!("{err}");
    }
    if lexer.has_errors() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
