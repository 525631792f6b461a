mod column;
pub use column::Column;

pub mod name;

mod table;
pub use table::Table;

mod tag;
pub use tag::{GormMarker, Tag};

mod ty;
pub use ty::{Category, GoType, TypeMapping};
