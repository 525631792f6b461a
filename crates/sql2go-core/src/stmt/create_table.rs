use super::{ColumnDef, IndexDef};

use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    /// Name of the table, without any schema qualifier
    pub name: String,

    /// Table-level `COMMENT`
    pub comment: Option<String>,

    /// Column definitions, in declaration order
    pub columns: Vec<ColumnDef>,

    /// Index definitions, in declaration order
    pub indexes: Vec<IndexDef>,
}

impl CreateTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            columns: vec![],
            indexes: vec![],
        }
    }

    /// Names of every column covered by a primary key index.
    pub fn primary_key_columns(&self) -> HashSet<&str> {
        self.indexes
            .iter()
            .filter(|index| index.primary && index.unique)
            .flat_map(|index| index.columns.iter().map(String::as_str))
            .collect()
    }
}
