//! Orderings used by the sorted reducers and sorted containers.
//!
//! Anything that compares two elements is a [`Comparator`]: plain closures
//! `Fn(&T, &T) -> Ordering`, the element's own order ([`Natural`]), an order
//! derived from a key ([`ByKey`]), or a comparator that falls back to the
//! natural order when none was configured ([`Order`]).
//!
//! This module corresponds to [`std::cmp`].

mod comparator;
mod order;

pub use comparator::*;
pub use order::*;
