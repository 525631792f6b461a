use super::{Category, Column};
use crate::Config;

use std::fmt;

/// Default value that earns a `default:current_time` gorm marker.
const SQL_CURRENT_TIMESTAMP: &str = "current_timestamp";

/// A struct tag attached to a generated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// `json:"<column>"`
    Json(String),

    /// `db:"<column>"`
    Db(String),

    /// `gorm:"<marker>;<marker>"`
    Gorm(Vec<GormMarker>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GormMarker {
    /// `column:<name>`
    Column(String),

    /// `primaryKey`
    PrimaryKey,

    /// `default:current_time`
    DefaultCurrentTime,
}

impl Tag {
    /// Composes the tags for `column` in their fixed order: `json`, `db`,
    /// then `gorm`.
    pub fn compose(column: &Column, config: &Config) -> Vec<Tag> {
        let mut tags = vec![];

        if config.tag_json {
            tags.push(Tag::Json(column.name.clone()));
        }

        if config.tag_db {
            tags.push(Tag::Db(column.name.clone()));
        }

        let gorm = &config.tag_gorm;

        if gorm.enable {
            let mut markers = vec![];

            if gorm.gorm_column {
                markers.push(GormMarker::Column(column.name.clone()));
            }

            if column.is_primary && gorm.gorm_primary_key {
                markers.push(GormMarker::PrimaryKey);
            }

            let defaults_to_now = column
                .default_value
                .as_deref()
                .is_some_and(|value| value.eq_ignore_ascii_case(SQL_CURRENT_TIMESTAMP));

            if column.category == Category::DateTime && defaults_to_now && gorm.gorm_current_time
            {
                markers.push(GormMarker::DefaultCurrentTime);
            }

            // Emitted even with no markers, as `gorm:""`
            tags.push(Tag::Gorm(markers));
        }

        tags
    }

    /// Joins tags with spaces and wraps them in back-ticks. Returns an empty
    /// string when there are no tags.
    pub fn text(tags: &[Tag]) -> String {
        if tags.is_empty() {
            return String::new();
        }

        let joined: Vec<_> = tags.iter().map(Tag::to_string).collect();
        format!("`{}`", joined.join(" "))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Json(name) => write!(f, "json:\"{name}\""),
            Tag::Db(name) => write!(f, "db:\"{name}\""),
            Tag::Gorm(markers) => {
                write!(f, "gorm:\"")?;

                let mut s = "";
                for marker in markers {
                    write!(f, "{s}{marker}")?;
                    s = ";";
                }

                write!(f, "\"")
            }
        }
    }
}

impl fmt::Display for GormMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GormMarker::Column(name) => write!(f, "column:{name}"),
            GormMarker::PrimaryKey => write!(f, "primaryKey"),
            GormMarker::DefaultCurrentTime => write!(f, "default:current_time"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Tag::Json("id".into()).to_string(), r#"json:"id""#);
        assert_eq!(Tag::Db("id".into()).to_string(), r#"db:"id""#);
        assert_eq!(Tag::Gorm(vec![]).to_string(), r#"gorm:"""#);
        assert_eq!(
            Tag::Gorm(vec![
                GormMarker::Column("id".into()),
                GormMarker::PrimaryKey,
                GormMarker::DefaultCurrentTime,
            ])
            .to_string(),
            r#"gorm:"column:id;primaryKey;default:current_time""#
        );
    }

    #[test]
    fn text() {
        assert_eq!(Tag::text(&[]), "");
        assert_eq!(
            Tag::text(&[Tag::Json("id".into()), Tag::Db("id".into())]),
            r#"`json:"id" db:"id"`"#
        );
    }
}
