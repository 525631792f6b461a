use super::{name, Category, GoType, Tag, TypeMapping};
use crate::{stmt::ColumnDef, Config};

use std::collections::HashSet;
use tracing::{trace, warn};

/// A column, as both its SQL definition and the Go field generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Name of the column in the SQL
    pub name: String,

    /// Declared SQL type name, e.g. `VARCHAR`
    pub type_name: String,

    /// Type length argument, verbatim
    pub type_len: Option<String>,

    /// Type length argument, when it is an integer
    pub type_len_int: Option<i64>,

    pub unsigned: bool,

    /// True if the column is covered by the table's primary key
    pub is_primary: bool,

    pub default_value: Option<String>,

    pub on_update: Option<String>,

    /// `COMMENT` text from the SQL
    pub comment: String,

    /// Name of the generated struct field
    pub go_name: String,

    pub go_type: GoType,

    /// Comment emitted after the field, with surrounding quotes removed
    pub go_comment: String,

    pub category: Category,

    pub tags: Vec<Tag>,

    /// The tags as they appear in the generated source, back-ticks included
    pub tag_text: String,
}

impl Column {
    pub(crate) fn from_def(def: &ColumnDef, primaries: &HashSet<&str>, config: &Config) -> Column {
        let mapping = TypeMapping::from_sql(&def.ty, config);
        let comment = def.comment.clone().unwrap_or_default();

        let mut column = Column {
            name: def.name.clone(),
            type_name: def.ty.name.clone(),
            type_len: def.ty.length.clone(),
            type_len_int: def.ty.length_int(),
            unsigned: def.ty.unsigned,
            is_primary: primaries.contains(def.name.as_str()),
            default_value: def.default.clone(),
            on_update: def.on_update.clone(),
            go_name: name::normalize(&def.name, config.column_lower),
            go_type: mapping.ty,
            go_comment: comment.trim_matches('\'').to_string(),
            comment,
            category: mapping.category,
            tags: vec![],
            tag_text: String::new(),
        };

        if column.has_multiline_comment() {
            warn!(
                column = %column.name,
                "comment spans several lines; lines after the first fall outside the Go comment"
            );
        }

        column.tags = Tag::compose(&column, config);
        column.tag_text = Tag::text(&column.tags);

        trace!(
            column = %column.name,
            sql_type = %def.ty,
            go_type = %column.go_type,
            primary = column.is_primary,
            "mapped column"
        );

        column
    }

    /// True if the Go comment contains a line break. The text is emitted
    /// as-is, so the lines after the first are not valid Go.
    pub fn has_multiline_comment(&self) -> bool {
        self.go_comment.contains('\n')
    }

    pub fn is_string(&self) -> bool {
        self.category == Category::String
    }

    pub fn is_numeric(&self) -> bool {
        self.category == Category::Numeric
    }

    pub fn is_datetime(&self) -> bool {
        self.category == Category::DateTime
    }

    pub fn is_bool(&self) -> bool {
        self.category == Category::Boolean
    }
}
