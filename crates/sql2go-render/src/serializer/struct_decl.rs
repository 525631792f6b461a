use super::{Formatter, Row, ToGo};

pub(super) struct StructDecl<'a> {
    pub(super) name: &'a str,
    pub(super) rows: &'a [Row<'a>],
}

impl ToGo for StructDecl<'_> {
    fn to_go(self, f: &mut Formatter<'_>) {
        fmt!(f, "type " self.name " struct {");
        f.newline();

        for row in self.rows {
            row.to_go(f);
        }

        fmt!(f, "}");
        f.newline();
    }
}
