use crate::{stmt::ColumnType, Config};

use std::fmt;

/// Go types a column can be declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoType {
    /// `time.Time`
    Time,

    /// `string`
    String,

    /// `[]byte`
    Bytes,

    /// `[]uint8`, used for `BIT`
    Bits,

    /// `bool`
    Bool,

    /// `int8` through `uint64`
    Int { bits: u8, unsigned: bool },

    /// `float32` or `float64`
    Float { bits: u8 },
}

/// Semantic category of a mapped column. Byte columns have no typed
/// category of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    String,
    Numeric,
    DateTime,
    Boolean,
    Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    pub ty: GoType,
    pub category: Category,
}

/// SQL type families. Each family resolves to a [`TypeMapping`] once the
/// column's modifiers and the config flags are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Time,
    Text,
    Blob,
    Bool,
    Bit,
    TinyInt,
    Int(u8),
    Float(u8),
}

/// SQL type names, matched case-insensitively against a column's base type.
const FAMILIES: &[(&str, Family)] = &[
    ("date", Family::Time),
    ("datetime", Family::Time),
    ("year", Family::Time),
    ("timestamp", Family::Time),
    ("time", Family::Time),
    ("char", Family::Text),
    ("varchar", Family::Text),
    ("varbinary", Family::Text),
    ("tinytext", Family::Text),
    ("text", Family::Text),
    ("mediumtext", Family::Text),
    ("longtext", Family::Text),
    ("tinyblob", Family::Blob),
    ("mediumblob", Family::Blob),
    ("blob", Family::Blob),
    ("longblob", Family::Blob),
    ("binary", Family::Blob),
    ("bool", Family::Bool),
    ("boolean", Family::Bool),
    ("bit", Family::Bit),
    ("tinyint", Family::TinyInt),
    ("smallint", Family::Int(16)),
    ("mediumint", Family::Int(32)),
    ("int", Family::Int(32)),
    ("integer", Family::Int(32)),
    ("bigint", Family::Int(64)),
    ("float", Family::Float(32)),
    ("double", Family::Float(64)),
    ("decimal", Family::Float(64)),
    ("dec", Family::Float(64)),
];

/// Family used for any type name missing from [`FAMILIES`].
const FALLBACK: Family = Family::Text;

impl Family {
    fn lookup(name: &str) -> Family {
        FAMILIES
            .iter()
            .find(|(sql_name, _)| sql_name.eq_ignore_ascii_case(name))
            .map(|(_, family)| *family)
            .unwrap_or(FALLBACK)
    }
}

impl TypeMapping {
    /// Maps a SQL column type to its Go type and category.
    pub fn from_sql(ty: &ColumnType, config: &Config) -> TypeMapping {
        match Family::lookup(&ty.name) {
            Family::Time => TypeMapping::new(GoType::Time, Category::DateTime),
            Family::Text => TypeMapping::new(GoType::String, Category::String),
            Family::Blob => TypeMapping::new(GoType::Bytes, Category::Bytes),
            Family::Bit => TypeMapping::new(GoType::Bits, Category::Bytes),
            Family::Bool if config.bool_type => TypeMapping::boolean(),
            Family::Bool => TypeMapping::integer(8, true, config),
            Family::TinyInt if ty.length_int() == Some(1) && config.bool_type => {
                TypeMapping::boolean()
            }
            Family::TinyInt => TypeMapping::integer(8, ty.unsigned, config),
            Family::Int(bits) => TypeMapping::integer(bits, ty.unsigned, config),
            Family::Float(bits) => TypeMapping::new(GoType::Float { bits }, Category::Numeric),
        }
    }

    pub const fn new(ty: GoType, category: Category) -> TypeMapping {
        TypeMapping { ty, category }
    }

    const fn boolean() -> TypeMapping {
        TypeMapping::new(GoType::Bool, Category::Boolean)
    }

    fn integer(bits: u8, unsigned: bool, config: &Config) -> TypeMapping {
        TypeMapping::new(
            GoType::Int {
                bits,
                unsigned: unsigned || config.force_unsigned,
            },
            Category::Numeric,
        )
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoType::Time => write!(f, "time.Time"),
            GoType::String => write!(f, "string"),
            GoType::Bytes => write!(f, "[]byte"),
            GoType::Bits => write!(f, "[]uint8"),
            GoType::Bool => write!(f, "bool"),
            GoType::Int { bits, unsigned } => {
                write!(f, "{}int{bits}", if *unsigned { "u" } else { "" })
            }
            GoType::Float { bits } => write!(f, "float{bits}"),
        }
    }
}
