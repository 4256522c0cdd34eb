use std::cmp::Ordering;

use super::{Comparator, Natural};

/// A configured ordering: either the element's natural order or a supplied
/// comparator.
///
/// Use [`Order::or_natural()`] when a comparator is optional configuration
/// and the element type has a natural order to fall back on. When it does
/// not, use the `try_to_sorted_*` reducer constructors instead, which reject
/// a missing comparator with a [`ConfigError`](crate::ConfigError).
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use collect_algebra::cmp::{Comparator, Order};
///
/// let configured: Option<fn(&i32, &i32) -> Ordering> = None;
/// let order = Order::or_natural(configured);
/// assert_eq!(order.compare(&1, &2), Ordering::Less);
///
/// let order = Order::or_natural(Some(|a: &i32, b: &i32| b.cmp(a)));
/// assert_eq!(order.compare(&1, &2), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Order<C> {
    /// The natural order of the element type.
    Natural,
    /// A supplied comparator.
    By(C),
}

impl<C> Order<C> {
    /// Uses `comparator` if present, the natural order otherwise.
    #[inline]
    pub fn or_natural(comparator: Option<C>) -> Self {
        comparator.map_or(Self::Natural, Self::By)
    }
}

impl<C> Default for Order<C> {
    #[inline]
    fn default() -> Self {
        Self::Natural
    }
}

impl<T, C> Comparator<T> for Order<C>
where
    T: Ord + ?Sized,
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            Self::Natural => Natural.compare(a, b),
            Self::By(comparator) => comparator.compare(a, b),
        }
    }
}
