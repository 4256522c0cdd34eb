use std::{
    fmt::{self, Debug, Display, Write},
    marker::PhantomData,
};

use crate::reducer::{Characteristics, Reducer};

/// A [`Reducer`] that joins the [`Display`] text of every item with a
/// separator, between a prefix and a suffix.
///
/// The default has no prefix or suffix and separates with `", "`.
///
/// This `struct` is created by [`joining()`], [`joining_with()`] and
/// [`Joining::default()`].
///
/// # Examples
///
/// ```
/// use collect_algebra::{prelude::*, reducers::Joining};
///
/// assert_eq!(Joining::default().reduce([1, 2, 3]), "1, 2, 3");
/// assert_eq!(Joining::<u8>::default().reduce([]), "");
/// ```
pub struct Joining<T> {
    prefix: String,
    separator: String,
    suffix: String,
    _marker: PhantomData<fn(T)>,
}

/// Creates a [`Joining`] reducer with the given prefix, separator and suffix.
///
/// The prefix and suffix are written even when there are no items. The
/// result is the same however the items are partitioned: a separator is
/// inserted at the seam of a combine only when both sides hold an item.
///
/// # Examples
///
/// ```
/// use collect_algebra::{prelude::*, reducers};
///
/// let list = reducers::joining("[", "; ", "]");
/// assert_eq!(list.reduce(['a', 'b']), "[a; b]");
/// assert_eq!(list.reduce_partitions([vec!['a'], vec![], vec!['b']]), "[a; b]");
/// assert_eq!(list.reduce([]), "[]");
/// ```
#[inline]
pub fn joining<T>(
    prefix: impl Into<String>,
    separator: impl Into<String>,
    suffix: impl Into<String>,
) -> Joining<T>
where
    T: Display,
{
    Joining {
        prefix: prefix.into(),
        separator: separator.into(),
        suffix: suffix.into(),
        _marker: PhantomData,
    }
}

/// Like [`joining()`], without a prefix or suffix.
#[inline]
pub fn joining_with<T>(separator: impl Into<String>) -> Joining<T>
where
    T: Display,
{
    joining("", separator, "")
}

impl<T> Joining<T> {
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[inline]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[inline]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl<T> Default for Joining<T> {
    #[inline]
    fn default() -> Self {
        Self {
            prefix: String::new(),
            separator: ", ".to_owned(),
            suffix: String::new(),
            _marker: PhantomData,
        }
    }
}

impl<T> Reducer for Joining<T>
where
    T: Display,
{
    type Item = T;
    /// The joined text, `None` until the first item.
    type Accumulator = Option<String>;
    type Output = String;

    #[inline]
    fn characteristics(&self) -> Characteristics {
        Characteristics::ORDERED
    }

    #[inline]
    fn seed(&self) -> Option<String> {
        None
    }

    fn accumulate(&self, accumulator: &mut Option<String>, item: T) {
        let text = match accumulator {
            Some(text) => {
                text.push_str(&self.separator);
                text
            }
            None => accumulator.insert(String::new()),
        };
        // Only `item`'s `Display` can fail here, and like `ToString` we treat
        // that as a bug in the implementation.
        write!(text, "{item}").expect("a Display implementation returned an error unexpectedly");
    }

    fn combine(&self, left: Option<String>, right: Option<String>) -> Option<String> {
        match (left, right) {
            (Some(mut left), Some(right)) => {
                left.reserve(self.separator.len() + right.len());
                left.push_str(&self.separator);
                left.push_str(&right);
                Some(left)
            }
            (left, None) => left,
            (None, right) => right,
        }
    }

    fn finish(&self, accumulator: Option<String>) -> String {
        let joined = accumulator.unwrap_or_default();
        let mut text = String::with_capacity(self.prefix.len() + joined.len() + self.suffix.len());
        text.push_str(&self.prefix);
        text.push_str(&joined);
        text.push_str(&self.suffix);
        text
    }
}

impl<T> Clone for Joining<T> {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            separator: self.separator.clone(),
            suffix: self.suffix.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> Debug for Joining<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Joining")
            .field("prefix", &self.prefix)
            .field("separator", &self.separator)
            .field("suffix", &self.suffix)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use crate::prelude::*;
    use crate::reducers::*;

    #[test]
    fn empty_partitions_add_no_separator() {
        let angled = joining("<", "|", ">");
        let partitions = [vec![], vec!["a"], vec![], vec![], vec!["b", "c"], vec![]];
        assert_eq!(angled.reduce_partitions(partitions), "<a|b|c>");
        assert_eq!(angled.reduce_partitions::<Vec<&str>>([]), "<>");
    }

    #[test]
    fn empty_strings_are_items() {
        assert_eq!(joining_with(",").reduce(["", "", ""]), ",,");
    }

    /// Writes part of its text, then fails.
    struct FailingDisplay;

    impl fmt::Display for FailingDisplay {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("par")?;
            Err(fmt::Error)
        }
    }

    #[test]
    #[should_panic(expected = "a Display implementation returned an error unexpectedly")]
    fn display_error_is_not_swallowed() {
        joining_with("-").reduce([FailingDisplay, FailingDisplay]);
    }
}

#[cfg(test)]
mod proptests {
    use itertools::Itertools;
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::reducers::*;
    use crate::test_utils::{BasicReducerTester, PredError, any_cuts};

    proptest! {
        #[test]
        fn all_reduce_methods_joining(
            words in propvec(".{0,3}", ..10),
            cuts in any_cuts(),
        ) {
            all_reduce_methods_joining_impl(words, cuts)?;
        }
    }

    fn all_reduce_methods_joining_impl(words: Vec<String>, cuts: Vec<usize>) -> TestCaseResult {
        BasicReducerTester {
            iter_factory: || words.iter(),
            reducer: joining("(", ", ", ")"),
            cuts,
            pred: |mut iter, output| {
                if format!("({})", iter.join(", ")) != output {
                    Err(PredError::IncorrectOutput)
                } else {
                    Ok(())
                }
            },
        }
        .test_reducer()
    }
}
