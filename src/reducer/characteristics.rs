/// Advisory metadata a [`Reducer`](super::Reducer) declares about itself.
///
/// Nothing in this crate schedules parallel work; these flags are for
/// whatever engine does. A reducer is either *ordered*, whose result depends
/// on the order its elements were seen (lists, sorted targets that keep the
/// first of several equal elements, last-write-wins maps), so partitions must
/// be combined in source order, or *unordered* (sets, bags), so partitions may
/// be combined in any order.
///
/// It also records whether the finisher is the identity, i.e. whether the
/// accumulator already *is* the result.
///
/// # Examples
///
/// ```
/// use collect_algebra::reducer::Characteristics;
///
/// let flags = Characteristics::UNORDERED.with_identity_finish();
/// assert!(flags.is_unordered());
/// assert!(flags.is_identity_finish());
/// assert!(!Characteristics::ORDERED.is_unordered());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Characteristics {
    unordered: bool,
    identity_finish: bool,
}

impl Characteristics {
    /// The result depends on the order elements are seen in.
    pub const ORDERED: Self = Self {
        unordered: false,
        identity_finish: false,
    };

    /// The result does not depend on the order elements are seen in.
    pub const UNORDERED: Self = Self {
        unordered: true,
        identity_finish: false,
    };

    /// Marks the finisher as the identity.
    #[inline]
    pub const fn with_identity_finish(self) -> Self {
        Self {
            identity_finish: true,
            ..self
        }
    }

    /// Clears the identity-finish flag, as any extra finisher must.
    #[inline]
    pub const fn without_identity_finish(self) -> Self {
        Self {
            identity_finish: false,
            ..self
        }
    }

    /// Returns `true` if partitions may be combined in any order.
    #[inline]
    pub const fn is_unordered(self) -> bool {
        self.unordered
    }

    /// Returns `true` if the accumulator already is the result.
    #[inline]
    pub const fn is_identity_finish(self) -> bool {
        self.identity_finish
    }
}
