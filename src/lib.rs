//! Reusable, combinable reductions over sequences, and set algebra over
//! finite collections.
//!
//! If [`Iterator`] is the "source half" of a data pipeline, a [`Reducer`] is
//! the "sink half": it describes *how* items are folded into a result, in
//! four phases.
//!
//! 1. **seed**: create a fresh, empty accumulator.
//! 2. **accumulate**: integrate one item into an accumulator.
//! 3. **combine**: merge the accumulators of two adjacent partitions.
//! 4. **finish**: turn the accumulator into the result.
//!
//! Because the reducer never holds the intermediate state, the same value
//! can drive a single sequential pass or many partitions folded
//! independently and combined afterwards, with identical results.
//!
//! # Motivation
//!
//! Suppose we want the distinct words of a text, sorted. With std alone:
//!
//! ```
//! use std::collections::HashSet;
//!
//! let words = ["to", "be", "or", "not", "to", "be"];
//! let mut distinct: Vec<_> = words
//!     .into_iter()
//!     .collect::<HashSet<_>>()
//!     .into_iter()
//!     .collect();
//! distinct.sort();
//!
//! assert_eq!(distinct, ["be", "not", "or", "to"]);
//! ```
//!
//! **Cons:** the procedure is spelled out every time, and it cannot be split
//! across partitions of the input without re-doing the merge by hand.
//!
//! With this crate the *what* is a value:
//!
//! ```
//! use collect_algebra::{prelude::*, reducers};
//!
//! let words = ["to", "be", "or", "not", "to", "be"];
//! let distinct_sorted = reducers::to_sorted_set();
//!
//! let whole = words.into_iter().reduce_with(&distinct_sorted);
//! let partitions = [&words[..3], &words[3..]].map(|part| part.iter().copied());
//! let split = distinct_sorted.reduce_partitions(partitions);
//!
//! assert!(whole.iter().eq(&["be", "not", "or", "to"]));
//! assert_eq!(whole, split);
//! ```
//!
//! # Modules
//!
//! - [`reducer`]: the [`Reducer`] protocol, its [`Characteristics`], and
//!   reducers built from closures.
//! - [`reducers`]: the catalog of ready-made reducers (lists, sets, bags,
//!   sorted targets, maps, multimaps, joined strings).
//! - [`container`]: the container capability the catalog builds on, and the
//!   containers std lacks ([`Bag`], [`SortedSet`], [`SortedBag`],
//!   [`Multimap`], [`Frozen`]).
//! - [`set`]: union, intersection, differences, subset tests, power set and
//!   cartesian product over any [`FiniteSet`].
//! - [`cmp`]: comparators for the sorted targets.
//!
//! # Errors
//!
//! Building a sorted reducer from configuration may fail with a
//! [`ConfigError`]. Nothing fails once a reduction has started.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events at `trace` level from partitioned
//! reductions and power-set generation, never per element. They cost
//! nothing unless a subscriber is installed.
//!
//! [`Reducer`]: reducer::Reducer
//! [`Characteristics`]: reducer::Characteristics
//! [`Bag`]: container::Bag
//! [`SortedSet`]: container::SortedSet
//! [`SortedBag`]: container::SortedBag
//! [`Multimap`]: container::Multimap
//! [`Frozen`]: container::Frozen
//! [`FiniteSet`]: set::FiniteSet

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cmp;
pub mod container;
mod error;
pub mod prelude;
pub mod reducer;
pub mod reducers;
pub mod set;

pub use error::*;

#[cfg(test)]
mod test_utils;
