pub mod filter;
pub mod page;
pub mod pattern;
pub mod sort;

pub use filter::Filter;
pub use page::{Page, Pageable, paginate};
pub use pattern::matches_text;
pub use sort::{NullOrdering, SortResolver, Sortable, compare_nullable};
