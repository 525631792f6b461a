pub mod config;
pub use config::Config;

mod error;
pub use error::{Error, Result};

pub mod parse;
pub use parse::parse;

pub mod schema;
pub use schema::{Column, Table};

pub mod stmt;

/// Parses a single `CREATE TABLE` statement and builds the table model that
/// the renderer consumes.
pub fn table_from_sql(sql: &str, config: &Config) -> Result<Table> {
    let create_table = parse(sql)?;
    Ok(Table::from_stmt(&create_table, config))
}
