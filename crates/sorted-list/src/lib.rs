//! sorted-list - an always-sorted, homogeneous sequence of integers or text.
//!
//! A [`SortedList`] keeps its values in ascending order on every insertion.
//! All values share one [`ElementKind`], fixed at construction or inferred
//! from the first value and never changed afterwards.
//!
//! ```
//! use sorted_list::SortedList;
//!
//! let mut list = SortedList::new();
//! list.add_all([5, 1, 3, 3]).unwrap();
//! assert_eq!(list.to_string(), "[1, 3, 3, 5]");
//! assert!(list.contains(3));
//! assert!(list.add("oops").is_err());
//! ```

mod error;
mod export;
mod iter;
mod node;
mod sorted_list;
mod util;
mod value;

pub use error::{Result, SortedListError};
pub use iter::Iter;
pub use node::Node;
pub use sorted_list::SortedList;
pub use value::{compare, ElementKind, Value, ValueRef};
