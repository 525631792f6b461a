use std::{io, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure is fatal for the run: the caller reports it and exits.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config file `{}`", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("failed to read SQL file `{}`", .path.display())]
    SqlRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("This may not be a SQL")]
    SqlParse(#[source] Option<sqlparser::parser::ParserError>),

    #[error("Only support DDL CREATE SQL")]
    UnsupportedStatement,
}

impl Error {
    pub fn is_sql_parse(&self) -> bool {
        matches!(self, Error::SqlParse(_))
    }

    pub fn is_unsupported_statement(&self) -> bool {
        matches!(self, Error::UnsupportedStatement)
    }
}
