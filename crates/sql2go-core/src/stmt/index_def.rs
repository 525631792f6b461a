/// An index over one or more columns of the table.
///
/// Inline `PRIMARY KEY` and `UNIQUE` column options are lowered into
/// single-column index definitions as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDef {
    /// True for the table's primary key
    pub primary: bool,

    /// True when the index enforces uniqueness. Always set for primary keys.
    pub unique: bool,

    /// Indexed column names, in declaration order
    pub columns: Vec<String>,
}

impl IndexDef {
    pub fn primary_key(columns: Vec<String>) -> Self {
        Self {
            primary: true,
            unique: true,
            columns,
        }
    }

    pub fn unique(columns: Vec<String>) -> Self {
        Self {
            primary: false,
            unique: true,
            columns,
        }
    }

    pub fn plain(columns: Vec<String>) -> Self {
        Self {
            primary: false,
            unique: false,
            columns,
        }
    }
}
