pub mod serializer;
pub use serializer::Serializer;

use sql2go_core::{Config, Table};

/// Renders `table` as a Go struct declaration using the settings in `config`.
pub fn render(table: &Table, config: &Config) -> String {
    Serializer::new(config).serialize(table)
}
