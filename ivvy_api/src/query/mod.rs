mod filter;
pub use self::filter::{FilterOp, FilterSpec, FilterValue};

mod page;
pub use self::page::{Page, DEFAULT_PER_PAGE};
