#[macro_use]
mod fmt;
use fmt::ToGo;

mod layout;
use layout::{Layout, Row};

mod pad;
use pad::Padded;

// Fragment serializers
mod field;
mod struct_decl;

use sql2go_core::{Config, Table};

/// Indentation in front of every struct field
const INDENT: &str = "    ";

/// Serialize a table to Go source text
#[derive(Debug, Clone)]
pub struct Serializer {
    /// When true, `// comment` trailers are left off
    ignore_comments: bool,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the generated source
    dst: &'a mut String,

    /// Column widths measured before any field is written
    layout: Layout,
}

impl Serializer {
    pub fn new(config: &Config) -> Serializer {
        Serializer {
            ignore_comments: config.ignore_comment,
        }
    }

    pub fn serialize(&self, table: &Table) -> String {
        let mut ret = String::new();

        let rows: Vec<_> = table.columns.iter().map(Row::from_column).collect();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            layout: Layout::measure(&rows),
        };

        struct_decl::StructDecl {
            name: &table.go_name,
            rows: &rows,
        }
        .to_go(&mut fmt);

        ret
    }
}

impl Formatter<'_> {
    /// Ends the current line, dropping any padding left at its end.
    fn newline(&mut self) {
        let len = self.dst.trim_end_matches(' ').len();
        self.dst.truncate(len);
        self.dst.push('\n');
    }
}
