//! Dialect-neutral description of a parsed `CREATE TABLE` statement.
//!
//! [`crate::parse`] lowers the parser's AST into these types so the rest of
//! the pipeline never depends on the SQL parser directly.

mod column_def;
pub use column_def::ColumnDef;

mod column_type;
pub use column_type::ColumnType;

mod create_table;
pub use create_table::CreateTable;

mod index_def;
pub use index_def::IndexDef;
