use super::{Formatter, Padded, Row, ToGo, INDENT};

impl ToGo for &Row<'_> {
    fn to_go(self, f: &mut Formatter<'_>) {
        let name = Padded(self.name, f.layout.name);
        let ty = Padded(&self.ty, f.layout.ty);

        fmt!(f, INDENT name " " ty " ");

        if f.layout.tag > 0 {
            let tag = Padded(self.tag, f.layout.tag);
            fmt!(f, tag " ");
        }

        if !self.comment.is_empty() && !f.serializer.ignore_comments {
            fmt!(f, "// " self.comment);
        }

        f.newline();
    }
}
