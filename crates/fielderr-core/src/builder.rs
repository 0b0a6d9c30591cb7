//! Flat-error intake
//!
//! The validation engine reports failures as a flat sequence of
//! namespace-addressed records. This module folds that sequence into a
//! single [`Validation`] tree: each record's namespace is parsed into a
//! path and its leaf inserted at that location, merging siblings that share
//! a path prefix into one subtree.

use crate::path::split_namespace;
use crate::tree::{FieldError, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// One field-level failure as reported by the external validation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatError {
    /// Dotted/bracketed location of the failed field within the validated
    /// value, e.g. `Signup.addresses[2].street`
    pub namespace: String,
    /// The failed rule, e.g. `required` or `min`
    pub tag: String,
    /// Immediate field name at the failure site
    #[serde(default)]
    pub field: String,
    /// Rule parameter, e.g. `4` for `min=4`
    #[serde(default)]
    pub param: String,
    /// The rejected value, passed through untouched
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Incrementally folds flat failures into a [`Validation`] tree.
///
/// The root starts as an empty keyed node; every [`push`](TreeBuilder::push)
/// parses one namespace and inserts one leaf. Construction is
/// single-threaded by design; callers feeding from concurrent producers
/// serialize their pushes.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    root: Validation,
    inserted: usize,
    skipped: usize,
}

impl TreeBuilder {
    /// Create a builder with an empty keyed root
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the record's namespace and insert its leaf.
    ///
    /// Records whose namespace yields no path carry no usable location and
    /// are skipped, not reported.
    pub fn push(&mut self, err: FlatError) {
        let path = split_namespace(&err.namespace);
        if path.is_empty() {
            trace!(tag = %err.tag, "skipping failure without a usable namespace");
            self.skipped += 1;
            return;
        }

        trace!(namespace = %err.namespace, tag = %err.tag, "inserting failure");
        let leaf = FieldError {
            tag: err.tag,
            field: err.field,
            param: err.param,
            value: err.value,
            path: err.namespace,
        };
        self.root.insert(&path, leaf);
        self.inserted += 1;
    }

    /// Finish and hand the tree to the caller.
    ///
    /// The tree is immutable from the caller's point of view once reading
    /// begins; nothing else holds a reference into it.
    pub fn build(self) -> Validation {
        debug!(
            inserted = self.inserted,
            skipped = self.skipped,
            "validation tree built"
        );
        self.root
    }
}

impl Extend<FlatError> for TreeBuilder {
    fn extend<I: IntoIterator<Item = FlatError>>(&mut self, errors: I) {
        for err in errors {
            self.push(err);
        }
    }
}

impl FromIterator<FlatError> for Validation {
    fn from_iter<I: IntoIterator<Item = FlatError>>(errors: I) -> Self {
        build_tree(errors)
    }
}

/// Fold a complete flat failure sequence into a tree in one call.
///
/// An empty sequence yields an empty keyed root.
pub fn build_tree<I>(errors: I) -> Validation
where
    I: IntoIterator<Item = FlatError>,
{
    let mut builder = TreeBuilder::new();
    builder.extend(errors);
    builder.build()
}
