use crate::{Error, Result};

use serde::Deserialize;
use std::{path::Path, str::FromStr};

/// Generator settings, read once from a YAML document.
///
/// Every key is optional. Missing keys fall back to `false` or the empty
/// string and unknown keys are ignored, so partial documents are accepted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the schema came from. Informational only.
    pub source: Source,

    /// Emit the table name as written in the SQL instead of PascalCase.
    pub table_lower: bool,

    /// Emit column names as written in the SQL instead of PascalCase.
    pub column_lower: bool,

    /// Drop `// comment` trailers from the generated fields.
    pub ignore_comment: bool,

    /// Map `BOOL`, `BOOLEAN` and `TINYINT(1)` to Go's `bool`.
    pub bool_type: bool,

    /// Add a `json:"<column>"` tag to every field.
    pub tag_json: bool,

    /// Add a `db:"<column>"` tag to every field.
    pub tag_db: bool,

    /// Render every integer column with its unsigned Go type.
    pub force_unsigned: bool,

    /// Settings for the `gorm:"..."` tag.
    pub tag_gorm: GormTag,
}

/// Connection metadata carried in the config file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Source {
    pub connect_drive: String,
    pub connect_string: String,
    pub database: String,
    pub table: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GormTag {
    /// Emit the `gorm` tag at all
    pub enable: bool,

    /// Include `column:<name>`
    pub gorm_column: bool,

    /// Include `default:current_time` on datetime columns defaulting to
    /// `CURRENT_TIMESTAMP`
    pub gorm_current_time: bool,

    /// Include `primaryKey` on primary key columns
    pub gorm_primary_key: bool,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        contents.parse()
    }

    pub fn table_lower(mut self, value: bool) -> Self {
        self.table_lower = value;
        self
    }

    pub fn column_lower(mut self, value: bool) -> Self {
        self.column_lower = value;
        self
    }

    pub fn ignore_comment(mut self, value: bool) -> Self {
        self.ignore_comment = value;
        self
    }

    pub fn bool_type(mut self, value: bool) -> Self {
        self.bool_type = value;
        self
    }

    pub fn tag_json(mut self, value: bool) -> Self {
        self.tag_json = value;
        self
    }

    pub fn tag_db(mut self, value: bool) -> Self {
        self.tag_db = value;
        self
    }

    pub fn force_unsigned(mut self, value: bool) -> Self {
        self.force_unsigned = value;
        self
    }

    pub fn tag_gorm(mut self, tag_gorm: GormTag) -> Self {
        self.tag_gorm = tag_gorm;
        self
    }
}

impl GormTag {
    /// A `gorm` tag with every marker switched on.
    pub fn all() -> Self {
        Self {
            enable: true,
            gorm_column: true,
            gorm_current_time: true,
            gorm_primary_key: true,
        }
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // An empty document deserializes to YAML null, which serde rejects
        // for a struct.
        if s.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config: Config = "\n  \n".parse().unwrap();
        assert_eq!(config, Config::default());
    }
}
