use crate::{
    stmt::{ColumnDef, ColumnType, CreateTable, IndexDef},
    Error, Result,
};

use sqlparser::{
    ast::{
        self, ColumnOption, CommentDef, CreateTableOptions, Expr, IndexColumn, SqlOption,
        Statement, TableConstraint,
    },
    dialect::MySqlDialect,
    parser::Parser,
};
use tracing::debug;

/// Parses SQL text that must hold exactly one `CREATE TABLE` statement.
///
/// Text the parser rejects (or that holds no statement at all) fails with
/// [`Error::SqlParse`]. Valid SQL of any other shape, including more than one
/// statement, fails with [`Error::UnsupportedStatement`].
pub fn parse(sql: &str) -> Result<CreateTable> {
    let mut statements =
        Parser::parse_sql(&MySqlDialect {}, sql).map_err(|err| Error::SqlParse(Some(err)))?;

    if statements.is_empty() {
        return Err(Error::SqlParse(None));
    }

    if statements.len() > 1 {
        debug!(count = statements.len(), "rejecting multi-statement input");
        return Err(Error::UnsupportedStatement);
    }

    match statements.remove(0) {
        Statement::CreateTable(create_table) => Ok(lower_create_table(&create_table)),
        stmt => {
            debug!(%stmt, "rejecting non-DDL statement");
            Err(Error::UnsupportedStatement)
        }
    }
}

fn lower_create_table(create_table: &ast::CreateTable) -> CreateTable {
    let name = create_table
        .name
        .0
        .last()
        .and_then(|part| part.as_ident())
        .map(|ident| ident.value.clone())
        .unwrap_or_default();

    let mut stmt = CreateTable::new(name);
    stmt.comment = table_comment(create_table);

    for constraint in &create_table.constraints {
        if let Some(index) = lower_constraint(constraint) {
            stmt.indexes.push(index);
        }
    }

    for column in &create_table.columns {
        let name = column.name.value.clone();
        let mut def = ColumnDef::new(&name, ColumnType::parse(&column.data_type.to_string()));

        for option in &column.options {
            match &option.option {
                ColumnOption::Default(expr) => def.default = Some(expr.to_string()),
                ColumnOption::OnUpdate(expr) => def.on_update = Some(expr.to_string()),
                ColumnOption::Comment(comment) => def.comment = Some(comment.clone()),
                ColumnOption::Unique { is_primary, .. } => {
                    let columns = vec![name.clone()];
                    stmt.indexes.push(if *is_primary {
                        IndexDef::primary_key(columns)
                    } else {
                        IndexDef::unique(columns)
                    });
                }
                _ => {}
            }
        }

        stmt.columns.push(def);
    }

    debug!(
        table = %stmt.name,
        columns = stmt.columns.len(),
        indexes = stmt.indexes.len(),
        "parsed CREATE TABLE"
    );

    stmt
}

/// MySQL puts `COMMENT = '...'` among the table options; other dialects
/// use the dedicated field.
fn table_comment(create_table: &ast::CreateTable) -> Option<String> {
    let options: &[SqlOption] = match &create_table.table_options {
        CreateTableOptions::With(options)
        | CreateTableOptions::Options(options)
        | CreateTableOptions::Plain(options)
        | CreateTableOptions::TableProperties(options) => options,
        CreateTableOptions::None => &[],
    };

    let from_options = options.iter().find_map(|option| match option {
        SqlOption::Comment(comment) => Some(comment),
        _ => None,
    });

    create_table
        .comment
        .as_ref()
        .or(from_options)
        .map(|comment| match comment {
            CommentDef::WithEq(text) | CommentDef::WithoutEq(text) => text.clone(),
        })
}

fn lower_constraint(constraint: &TableConstraint) -> Option<IndexDef> {
    let index = match constraint {
        TableConstraint::PrimaryKey { columns, .. } => IndexDef::primary_key(idents(columns)),
        TableConstraint::Unique { columns, .. } => IndexDef::unique(idents(columns)),
        TableConstraint::Index { columns, .. }
        | TableConstraint::FulltextOrSpatial { columns, .. } => IndexDef::plain(idents(columns)),
        _ => return None,
    };

    Some(index)
}

fn idents(columns: &[IndexColumn]) -> Vec<String> {
    columns
        .iter()
        .map(|column| match &column.column.expr {
            Expr::Identifier(ident) => ident.value.clone(),
            expr => expr.to_string(),
        })
        .collect()
}
