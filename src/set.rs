//! Set algebra over finite collections of unique elements.
//!
//! Every operation reads its operands through [`FiniteSet`] and never mutates
//! them. Results are fresh [`HashSet`]s, or, for the `*_into` variants, the
//! caller's own [`MutableSet`] target, which may already hold elements and
//! is handed back once filled. That makes it cheap to fold many sets into one:
//!
//! ```
//! use std::collections::{BTreeSet, HashSet};
//! use collect_algebra::set;
//!
//! let a = HashSet::from([1, 2]);
//! let b = BTreeSet::from([2, 3]);
//! let c = HashSet::from([5]);
//!
//! let all = set::union_into(&a, &b, BTreeSet::new());
//! let all = set::union_into(&all, &c, all.clone());
//! assert_eq!(all, BTreeSet::from([1, 2, 3, 5]));
//! ```
//!
//! # Preconditions
//!
//! Operands must not be mutated while an operation reads them (which the
//! borrow checker already rules out for safe code), and element equality,
//! hashing and ordering must be free of side effects.
//!
//! [`HashSet`]: std::collections::HashSet

mod algebra;
mod cartesian;
mod finite_set;
mod power_set;

pub use algebra::*;
pub use cartesian::*;
pub use finite_set::*;
pub use power_set::*;
