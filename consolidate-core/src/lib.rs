//! consolidate-core: row types and the pure algorithms behind CSV consolidation

pub mod multiset;
pub mod normalize;
pub mod row;
pub mod sort_key;

pub use multiset::OrderedMultiSet;
pub use normalize::{collapse_spaces, is_blank, normalize_row};
pub use row::{Header, Row};
pub use sort_key::{DATE_FORMATS, SortKey, parse_sort_key};
