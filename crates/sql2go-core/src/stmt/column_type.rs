use std::fmt;

/// A column type broken into the parts the type mapper looks at.
///
/// Built from the SQL text of a type such as `VARCHAR(20)`,
/// `DECIMAL(10,2)` or `BIGINT(20) UNSIGNED`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnType {
    /// Base type name, e.g. `VARCHAR`
    pub name: String,

    /// First type argument, verbatim
    pub length: Option<String>,

    /// Second type argument, verbatim
    pub scale: Option<String>,

    pub unsigned: bool,
}

impl ColumnType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            length: None,
            scale: None,
            unsigned: false,
        }
    }

    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = Some(length.into());
        self
    }

    pub fn with_scale(mut self, scale: impl Into<String>) -> Self {
        self.scale = Some(scale.into());
        self
    }

    pub fn with_unsigned(mut self, unsigned: bool) -> Self {
        self.unsigned = unsigned;
        self
    }

    /// Splits type text into name, arguments and the `UNSIGNED` modifier.
    pub fn parse(src: &str) -> Self {
        let src = src.trim();
        let name_end = src
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(src.len());
        let (name, rest) = src.split_at(name_end);
        let rest = rest.trim_start();

        let mut length = None;
        let mut scale = None;

        let modifiers = match rest.strip_prefix('(').and_then(|args| {
            let close = args.find(')')?;
            Some((&args[..close], &args[close + 1..]))
        }) {
            Some((args, modifiers)) => {
                let mut args = args.splitn(2, ',').map(str::trim);
                length = args.next().filter(|arg| !arg.is_empty()).map(String::from);
                scale = args.next().filter(|arg| !arg.is_empty()).map(String::from);
                modifiers
            }
            None => rest,
        };

        let unsigned = modifiers
            .split_whitespace()
            .any(|word| word.eq_ignore_ascii_case("unsigned"));

        Self {
            name: name.to_string(),
            length,
            scale,
            unsigned,
        }
    }

    /// The length argument as an integer, when it is one.
    pub fn length_int(&self) -> Option<i64> {
        self.length.as_deref()?.parse().ok()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;

        match (&self.length, &self.scale) {
            (Some(length), Some(scale)) => write!(f, "({length},{scale})")?,
            (Some(length), None) => write!(f, "({length})")?,
            _ => {}
        }

        if self.unsigned {
            write!(f, " UNSIGNED")?;
        }

        Ok(())
    }
}
