use super::{Formatter, ToGo};

/// Text left-aligned in a field `width` characters wide.
pub(super) struct Padded<'a>(pub(super) &'a str, pub(super) usize);

impl ToGo for Padded<'_> {
    fn to_go(self, f: &mut Formatter<'_>) {
        let Padded(text, width) = self;

        f.dst.push_str(text);

        let len = text.chars().count();
        f.dst.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    }
}
