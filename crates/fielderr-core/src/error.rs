//! Error types for tree navigation
//!
//! The library is total over its inputs: any flat failure sequence folds
//! into a valid tree, and rendering and translation cannot fail. The one
//! fallible surface is [`Validation::get`](crate::Validation::get), which
//! reports misuse (such as a key of the wrong kind for the node it
//! addresses) as typed errors rather than panicking.

use std::fmt;
use thiserror::Error;

/// Convenience alias for results using this crate's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// The three shapes a [`Validation`](crate::Validation) node can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Terminal validation failure
    Leaf,
    /// Struct or map field, addressed by string key
    Keyed,
    /// Sequence field, addressed by integer position
    Indexed,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Leaf => write!(f, "leaf"),
            NodeKind::Keyed => write!(f, "keyed"),
            NodeKind::Indexed => write!(f, "indexed"),
        }
    }
}

/// Navigation errors raised by [`Validation::get`](crate::Validation::get)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A string key was applied to an indexed node, an integer key to a
    /// keyed node, or any key to a leaf
    #[error("Kind mismatch at '{path}': key {key} cannot address a node of kind {found}")]
    KindMismatch {
        key: String,
        found: NodeKind,
        path: String,
    },

    /// A keyed node has no entry for the requested key
    #[error("Unknown key '{key}' at '{path}'")]
    UnknownKey { key: String, path: String },

    /// An indexed node was addressed at or past its length
    #[error("Index out of bounds at '{path}': {index} in sequence of length {length}")]
    IndexOutOfBounds {
        index: usize,
        length: usize,
        path: String,
    },
}

impl Error {
    /// Create a kind mismatch error
    pub fn kind_mismatch(
        key: impl Into<String>,
        found: NodeKind,
        path: impl Into<String>,
    ) -> Self {
        Self::KindMismatch {
            key: key.into(),
            found,
            path: path.into(),
        }
    }

    /// Create an unknown key error
    pub fn unknown_key(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self::UnknownKey {
            key: key.into(),
            path: path.into(),
        }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, length: usize, path: impl Into<String>) -> Self {
        Self::IndexOutOfBounds {
            index,
            length,
            path: path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_display() {
        assert_eq!(NodeKind::Leaf.to_string(), "leaf");
        assert_eq!(NodeKind::Keyed.to_string(), "keyed");
        assert_eq!(NodeKind::Indexed.to_string(), "indexed");
    }

    #[test]
    fn test_kind_mismatch_display() {
        let err = Error::kind_mismatch("'street'", NodeKind::Indexed, "addresses");
        assert_eq!(
            err.to_string(),
            "Kind mismatch at 'addresses': key 'street' cannot address a node of kind indexed"
        );
    }

    #[test]
    fn test_index_out_of_bounds_display() {
        let err = Error::index_out_of_bounds(5, 2, "addresses");
        assert_eq!(
            err.to_string(),
            "Index out of bounds at 'addresses': 5 in sequence of length 2"
        );
    }
}
