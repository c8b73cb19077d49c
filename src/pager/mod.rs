mod link;
mod paginator;

pub use link::{Link, LinkKind};
pub use paginator::{Pager, PagerError};
