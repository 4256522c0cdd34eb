//! Ready-made [`Reducer`](crate::reducer::Reducer)s, named after the shape
//! of their result.
//!
//! | Constructor | Result | Ordered |
//! |-------------|--------|---------|
//! | [`to_list()`] | `Vec<T>` | yes |
//! | [`to_set()`] | `HashSet<T>` | no |
//! | [`to_bag()`] | [`Bag<T>`](crate::container::Bag) | no |
//! | [`to_container()`] | any [`Container`](crate::container::Container) | as declared |
//! | [`to_sorted_list()`] and friends | `Vec<T>`, sorted | yes |
//! | [`to_sorted_set()`] and friends | [`SortedSet<T, C>`](crate::container::SortedSet) | yes |
//! | [`to_sorted_bag()`] and friends | [`SortedBag<T, C>`](crate::container::SortedBag) | yes |
//! | [`to_map()`], [`to_sorted_map()`] | `HashMap<K, V>`, `BTreeMap<K, V>` | yes |
//! | [`to_multimap()`] and the list, set and bag shorthands | [`Multimap<K, C>`](crate::container::Multimap) | per group |
//! | [`joining()`], [`Joining::default()`] | `String` | yes |
//!
//! Sorted reducers never sort while accumulating: elements are gathered as
//! they come and sorted once when the reduction finishes. The `try_*_by`
//! constructors take an optional comparator for when the ordering is
//! configuration, and fail with
//! [`ConfigError::MissingOrdering`](crate::ConfigError::MissingOrdering)
//! right away if it is missing.
//!
//! Every reducer can finish into a read-only result with
//! [`frozen()`](crate::reducer::Reducer::frozen).
//!
//! ```
//! use std::collections::HashSet;
//! use collect_algebra::{prelude::*, reducers};
//!
//! let nums = [3, 1, 2, 1];
//!
//! assert_eq!(reducers::to_set().reduce(nums), HashSet::from([1, 2, 3]));
//! assert_eq!(reducers::to_sorted_list().reduce(nums), [1, 1, 2, 3]);
//! assert_eq!(reducers::joining_with("-").reduce(nums), "3-1-2-1");
//! ```

mod joining;
mod map;
mod multimap;
mod sorted;
mod to_container;

pub use joining::*;
pub use map::*;
pub use multimap::*;
pub use sorted::*;
pub use to_container::*;
