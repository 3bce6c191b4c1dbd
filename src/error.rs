//! Errors returned by the tree.
//!
//! Looking something up that isn't there is not an error: lookups return `None`. The only
//! operation that can fail is [`Tree::remove`][crate::Tree::remove], because its caller asked
//! for a specific item to be taken out.

use thiserror::Error;

/// Why a [`Tree`][crate::Tree] operation was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The item to remove is not stored in the tree. Nothing was modified.
    #[error("item not in tree")]
    ItemNotFound,
}

/// `Result` specialised to this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_not_found_message() {
        assert_eq!(Error::ItemNotFound.to_string(), "item not in tree");
    }
}
