use super::{name, Column};
use crate::{stmt::CreateTable, Config};

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Name of the table in the SQL
    pub name: String,

    /// Name of the generated struct
    pub go_name: String,

    /// Table-level `COMMENT` text
    pub comment: String,

    /// Columns, in declaration order
    pub columns: Vec<Column>,
}

impl Table {
    pub fn from_stmt(stmt: &CreateTable, config: &Config) -> Table {
        let primaries = stmt.primary_key_columns();

        let columns = stmt
            .columns
            .iter()
            .map(|def| Column::from_def(def, &primaries, config))
            .collect();

        let table = Table {
            name: stmt.name.clone(),
            go_name: name::normalize(&stmt.name, config.table_lower),
            comment: stmt.comment.clone().unwrap_or_default(),
            columns,
        };

        debug!(table = %table.name, go_name = %table.go_name, "built table");

        table
    }

    /// Returns the column named `name` in the SQL.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// True if at least one column carries a struct tag.
    pub fn has_tags(&self) -> bool {
        self.columns.iter().any(|column| !column.tag_text.is_empty())
    }
}
