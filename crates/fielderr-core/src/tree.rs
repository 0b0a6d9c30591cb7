//! The Validation tree
//!
//! A [`Validation`] value mirrors the shape of the validated value: structs
//! and map fields become keyed nodes while slices and arrays become indexed
//! nodes, with each individual failure as a leaf. The tree is built by
//! repeated [`insert`](Validation::insert) calls, one flat failure at a
//! time, and read through [`get`](Validation::get), `Display`, `Serialize`,
//! or [`translate`](Validation::translate).
//!
//! Copyright (c) 2026 Fielderr Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, NodeKind, Result};
use crate::path::PathElem;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A single field-level validation failure.
///
/// Immutable once constructed; the tree owns its leaves outright.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// The failed rule, e.g. `required` or `min`
    pub tag: String,
    /// Immediate field name at the failure site (may be empty)
    pub field: String,
    /// Rule parameter, e.g. `4` for `min=4` (may be empty)
    pub param: String,
    /// The rejected value, passed through untouched and never interpreted
    pub value: serde_json::Value,
    /// Full original namespace, kept for diagnostics
    pub path: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}

/// A key for navigating a built tree with [`Validation::get`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// Addresses an entry of a keyed node
    Field(&'a str),
    /// Addresses a position of an indexed node
    Index(usize),
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Field(name)
    }
}

impl From<usize> for Key<'_> {
    fn from(position: usize) -> Self {
        Key::Index(position)
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Field(name) => write!(f, "'{}'", name),
            Key::Index(position) => write!(f, "[{}]", position),
        }
    }
}

/// A node of the validation tree: a single failure, a keyed map of child
/// nodes, or an ordered sequence of child nodes.
///
/// The default value is an empty keyed node, the usual tree root.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// Terminal validation failure
    Leaf(FieldError),
    /// Struct or map field: children addressed by unique string key
    Keyed(BTreeMap<String, Validation>),
    /// Sequence field: children addressed by position, order preserved
    Indexed(Vec<Validation>),
}

impl Default for Validation {
    fn default() -> Self {
        Validation::Keyed(BTreeMap::new())
    }
}

impl Validation {
    /// Insert a leaf at the location named by `path`, lazily materializing
    /// the intermediate nodes the path implies.
    ///
    /// An empty path is a no-op. The last insertion at any given location
    /// wins. Positions addressed into an indexed node are assumed to arrive
    /// in non-decreasing order: a position at or past the current end
    /// appends, never leaving a sparse hole.
    pub fn insert(&mut self, path: &[PathElem], err: FieldError) {
        let Some((head, tail)) = path.split_first() else {
            return;
        };

        match self {
            // a leaf holds no children; nothing to descend into
            Validation::Leaf(_) => {}
            Validation::Keyed(entries) => {
                // well-formed paths address keyed nodes by field name; a
                // positional element here degrades to the empty key
                let name = match head {
                    PathElem::Field(name) => name.clone(),
                    PathElem::Index(_) => String::new(),
                };
                match tail.first() {
                    None => {
                        entries.insert(name, Validation::Leaf(err));
                    }
                    Some(next) => {
                        entries
                            .entry(name)
                            .or_insert_with(|| Validation::node_for(next))
                            .insert(tail, err);
                    }
                }
            }
            Validation::Indexed(items) => {
                let position = match head {
                    PathElem::Index(position) => *position,
                    PathElem::Field(_) => 0,
                };
                match tail.first() {
                    None => {
                        if position >= items.len() {
                            items.push(Validation::Leaf(err));
                        } else {
                            items[position] = Validation::Leaf(err);
                        }
                    }
                    Some(next) => {
                        if position < items.len() {
                            items[position].insert(tail, err);
                        } else {
                            let mut child = Validation::node_for(next);
                            child.insert(tail, err);
                            items.push(child);
                        }
                    }
                }
            }
        }
    }

    /// Empty node of the kind the given element addresses
    fn node_for(elem: &PathElem) -> Validation {
        match elem {
            PathElem::Field(_) => Validation::Keyed(BTreeMap::new()),
            PathElem::Index(_) => Validation::Indexed(Vec::with_capacity(5)),
        }
    }

    /// Navigate the tree by a key sequence.
    ///
    /// An empty sequence returns the node itself. Applying a key of the
    /// wrong kind for the node it addresses is a usage error and yields
    /// [`Error::KindMismatch`]; absent keys and out-of-range positions
    /// yield [`Error::UnknownKey`] and [`Error::IndexOutOfBounds`].
    pub fn get(&self, keys: &[Key<'_>]) -> Result<&Validation> {
        let mut node = self;
        let mut trail = String::new();
        for key in keys {
            node = node.child(key, &trail)?;
            match key {
                Key::Field(name) => {
                    if !trail.is_empty() {
                        trail.push('.');
                    }
                    trail.push_str(name);
                }
                Key::Index(position) => {
                    trail.push_str(&format!("[{}]", position));
                }
            }
        }
        Ok(node)
    }

    fn child(&self, key: &Key<'_>, trail: &str) -> Result<&Validation> {
        let at = if trail.is_empty() { "(root)" } else { trail };
        match (self, key) {
            (Validation::Keyed(entries), Key::Field(name)) => entries
                .get(*name)
                .ok_or_else(|| Error::unknown_key(*name, at)),
            (Validation::Indexed(items), Key::Index(position)) => items
                .get(*position)
                .ok_or_else(|| Error::index_out_of_bounds(*position, items.len(), at)),
            (node, key) => Err(Error::kind_mismatch(key.to_string(), node.kind(), at)),
        }
    }

    /// The shape of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Validation::Leaf(_) => NodeKind::Leaf,
            Validation::Keyed(_) => NodeKind::Keyed,
            Validation::Indexed(_) => NodeKind::Indexed,
        }
    }

    /// True if this node is a single failure
    pub fn is_leaf(&self) -> bool {
        matches!(self, Validation::Leaf(_))
    }

    /// True if this node is addressed by string key
    pub fn is_keyed(&self) -> bool {
        matches!(self, Validation::Keyed(_))
    }

    /// True if this node is addressed by position
    pub fn is_indexed(&self) -> bool {
        matches!(self, Validation::Indexed(_))
    }

    /// The failure record, if this node is a leaf
    pub fn as_leaf(&self) -> Option<&FieldError> {
        match self {
            Validation::Leaf(err) => Some(err),
            _ => None,
        }
    }

    /// The child map, if this node is keyed
    pub fn as_keyed(&self) -> Option<&BTreeMap<String, Validation>> {
        match self {
            Validation::Keyed(entries) => Some(entries),
            _ => None,
        }
    }

    /// The child sequence, if this node is indexed
    pub fn as_indexed(&self) -> Option<&[Validation]> {
        match self {
            Validation::Indexed(items) => Some(items),
            _ => None,
        }
    }

    /// Number of direct children; zero for a leaf
    pub fn len(&self) -> usize {
        match self {
            Validation::Leaf(_) => 0,
            Validation::Keyed(entries) => entries.len(),
            Validation::Indexed(items) => items.len(),
        }
    }

    /// True if this node has no children; always true for a leaf
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Leaf(err) => write!(f, "\"{}\"", err),
            Validation::Keyed(entries) => {
                write!(f, "{{")?;
                for (i, (key, child)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\": {}", key, child)?;
                }
                write!(f, "}}")
            }
            Validation::Indexed(items) => {
                write!(f, "[")?;
                for (i, child) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, "]")
            }
        }
    }
}

// A built tree is itself usable as an error value.
impl std::error::Error for Validation {}

impl Serialize for Validation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Validation::Leaf(err) => serializer.serialize_str(&err.tag),
            Validation::Keyed(entries) => entries.serialize(serializer),
            Validation::Indexed(items) => items.serialize(serializer),
        }
    }
}
