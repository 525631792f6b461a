mod logging;
pub use logging::init_logging;

use anyhow::Result;
use clap::Parser;
use sql2go_core::{Config, Error};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Generate a Go struct declaration from a MySQL `CREATE TABLE` statement
#[derive(Parser, Debug)]
#[command(name = "sql2go")]
#[command(version, about)]
pub struct Cli {
    /// The file holding the CREATE TABLE statement
    #[arg(short = 's', long = "sql", default_value = "my.sql")]
    pub sql: PathBuf,

    /// Generator config
    #[arg(short = 'c', long = "config", default_value = "default.yaml")]
    pub config: PathBuf,

    /// Daemon mode (accepted, currently no effect)
    #[arg(short = 'd', long = "daemon")]
    pub daemon: bool,
}

impl Cli {
    /// Load the config and SQL named on the command line and render the
    /// struct declaration.
    pub fn run(&self) -> Result<String> {
        if self.daemon {
            debug!("daemon mode requested; ignoring");
        }

        let config = Config::load(&self.config)?;
        debug!(path = %self.config.display(), source = ?config.source, "loaded config");

        let sql = read_sql(&self.sql)?;
        let output = generate(&sql, &config)?;

        info!(sql = %self.sql.display(), "generated struct");

        Ok(output)
    }
}

/// Runs the whole pipeline over SQL text that is already in memory.
pub fn generate(sql: &str, config: &Config) -> Result<String> {
    let table = sql2go_core::table_from_sql(sql, config)?;
    Ok(sql2go_render::render(&table, config))
}

fn read_sql(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|source| Error::SqlRead {
        path: path.to_path_buf(),
        source,
    })
}
