use thiserror::Error;

/// Errors raised while *building* a reducer.
///
/// A reducer that was built successfully never fails during a reduction;
/// panics from user-supplied functions simply unwind through it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A sorted target was requested without any ordering to sort by.
    #[error("sorted target `{target}` has no ordering: supply a comparator")]
    MissingOrdering {
        /// The catalog entry that was being built, e.g. `"sorted list"`.
        target: &'static str,
    },
}
