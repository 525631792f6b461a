use sql2go_core::Column;

/// The cells of one struct field, rendered to text ahead of layout.
pub(super) struct Row<'a> {
    pub(super) name: &'a str,
    pub(super) ty: String,
    pub(super) tag: &'a str,
    pub(super) comment: &'a str,
}

/// Widest cell of each field across all rows, in characters.
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct Layout {
    pub(super) name: usize,
    pub(super) ty: usize,

    /// Zero when no row has a tag, which drops the tag field entirely
    pub(super) tag: usize,
}

impl<'a> Row<'a> {
    pub(super) fn from_column(column: &'a Column) -> Row<'a> {
        Row {
            name: &column.go_name,
            ty: column.go_type.to_string(),
            tag: &column.tag_text,
            comment: &column.go_comment,
        }
    }
}

impl Layout {
    pub(super) fn measure(rows: &[Row<'_>]) -> Layout {
        Layout {
            name: widest(rows.iter().map(|row| row.name)),
            ty: widest(rows.iter().map(|row| row.ty.as_str())),
            tag: widest(rows.iter().map(|row| row.tag)),
        }
    }
}

fn widest<'a>(cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(|cell| cell.chars().count()).max().unwrap_or(0)
}
