//! Leaf translation
//!
//! [`Validation::translate`] walks a built tree and maps every leaf through
//! a caller-supplied function (typically a localizer), producing a
//! [`Translated`] tree of the same shape built from plain generic
//! containers. The result is decoupled from the validation variants and
//! encodes directly to a wire format.
//!
//! Copyright (c) 2026 Fielderr Team
//! Licensed under the Apache-2.0 license

use crate::tree::{FieldError, Validation};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// A structural analog of [`Validation`] holding caller-produced leaves.
///
/// Same keys at every keyed node, same length and order at every indexed
/// node; only the leaves differ.
#[derive(Debug, Clone, PartialEq)]
pub enum Translated<T> {
    /// Translated leaf
    Value(T),
    /// Keyed children, mirroring a keyed validation node
    Keyed(BTreeMap<String, Translated<T>>),
    /// Ordered children, mirroring an indexed validation node
    Indexed(Vec<Translated<T>>),
}

impl<T> Translated<T> {
    /// The translated leaf, if this node is one
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Translated::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The child map, if this node is keyed
    pub fn as_keyed(&self) -> Option<&BTreeMap<String, Translated<T>>> {
        match self {
            Translated::Keyed(entries) => Some(entries),
            _ => None,
        }
    }

    /// The child sequence, if this node is indexed
    pub fn as_indexed(&self) -> Option<&[Translated<T>]> {
        match self {
            Translated::Indexed(items) => Some(items),
            _ => None,
        }
    }
}

impl<T: Serialize> Serialize for Translated<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Translated::Value(value) => value.serialize(serializer),
            Translated::Keyed(entries) => entries.serialize(serializer),
            Translated::Indexed(items) => items.serialize(serializer),
        }
    }
}

impl Validation {
    /// Map every leaf through `f`, preserving the tree shape.
    pub fn translate<T, F>(&self, f: &F) -> Translated<T>
    where
        F: Fn(&FieldError) -> T,
    {
        match self {
            Validation::Leaf(err) => Translated::Value(f(err)),
            Validation::Keyed(entries) => Translated::Keyed(
                entries
                    .iter()
                    .map(|(key, child)| (key.clone(), child.translate(f)))
                    .collect(),
            ),
            Validation::Indexed(items) => {
                Translated::Indexed(items.iter().map(|child| child.translate(f)).collect())
            }
        }
    }
}
