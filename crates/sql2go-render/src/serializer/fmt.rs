use super::Formatter;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_go($f);
        )*
    }};
}

pub(super) trait ToGo {
    fn to_go(self, f: &mut Formatter<'_>);
}

impl ToGo for &str {
    fn to_go(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}
