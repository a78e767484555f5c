use crate::ItemKey;

/// Precondition violations reported by the layout and recycling functions.
///
/// Every variant is a caller bug rather than a runtime condition: there is no I/O underneath, so
/// nothing here is worth retrying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("scroll view size must be greater than zero")]
    EmptyViewport,

    #[error("entry {index} overlaps or precedes the entry before it")]
    UnsortedEntries { index: usize },

    #[error("key {key} appears more than once in the previous items")]
    DuplicateKey { key: ItemKey },

    #[error("no unused keys are left to mint")]
    KeysExhausted,
}
