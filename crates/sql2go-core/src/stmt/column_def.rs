use super::ColumnType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Name of the column as written in the SQL
    pub name: String,

    /// Declared column type
    pub ty: ColumnType,

    /// `DEFAULT` expression, rendered back to SQL text
    pub default: Option<String>,

    /// `ON UPDATE` expression, rendered back to SQL text
    pub on_update: Option<String>,

    /// `COMMENT` text
    pub comment: Option<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
            on_update: None,
            comment: None,
        }
    }
}
