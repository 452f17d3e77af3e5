//! Growable contiguous list with fallible, amortized geometric growth.
//!
//! `List<T>` keeps its elements in one heap buffer. The first growth allocates
//! `DEFAULT_INITIAL_CAPACITY` slots (configurable with `ListBuilder`), every later
//! growth doubles. Running out of memory, bad indices, failed searches and pops from
//! an empty list are all reported as `ListError`, and a failed operation never
//! modifies the list.
//!
//! Enable the `logging` feature to trace buffer growth through the `log` crate.

mod logging;
mod error;
mod raw;
mod list;
mod builder;
mod traits;
mod report;

pub use error::{AllocError, ListError};
pub use raw::DEFAULT_INITIAL_CAPACITY;
pub use list::List;
pub use builder::ListBuilder;
pub use traits::ListIterator;
pub use report::{Report, Summary};

#[cfg(test)]
pub mod dropflag;
