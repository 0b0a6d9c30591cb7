//! Namespace parsing
//!
//! A validation engine locates each failed field with a dotted/bracketed
//! namespace string such as `Signup.addresses[2].street`. This module parses
//! those namespaces into ordered [`PathElem`] sequences, distinguishing
//! struct fields, sequence positions, and map keys whose bracket syntax
//! collides with sequence indices.
//!
//! Copyright (c) 2026 Fielderr Team
//! Licensed under the Apache-2.0 license

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Trailing bracket content that names a sequence position
static INDEX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([0-9]+)\]$").unwrap());

/// Trailing bracket content that names a map key
static KEY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]$").unwrap());

/// One parsed unit of a namespace.
///
/// Consecutive elements encode nesting depth, not breadth. A segment like
/// `bar[0]` expands to two elements, `Field("bar")` then `Index(0)`: field
/// `bar` is a sequence and the failure sits at position 0. A segment like
/// `deeper[hadouken]` expands to `Field("deeper")` then `Field("hadouken")`:
/// `deeper` is a map keyed by arbitrary strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathElem {
    /// Struct field or map key
    Field(String),
    /// Sequence position
    Index(usize),
}

impl fmt::Display for PathElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElem::Field(name) => write!(f, "{}", name),
            PathElem::Index(position) => write!(f, "[{}]", position),
        }
    }
}

/// Parse a namespace into ordered path elements.
///
/// The first dot-segment names the validated root type and is discarded:
/// the tree root stands for the value, not its type. An empty namespace
/// yields no elements (the caller skips insertion); a namespace without any
/// dot is taken verbatim as a single field element, brackets uninterpreted.
pub fn split_namespace(namespace: &str) -> Vec<PathElem> {
    if namespace.is_empty() {
        return Vec::new();
    }

    let parts: Vec<&str> = namespace.split('.').collect();
    if parts.len() == 1 {
        return vec![PathElem::Field(namespace.to_string())];
    }

    let mut elems = Vec::with_capacity(parts.len() - 1);
    for part in &parts[1..] {
        split_segment(part, &mut elems);
    }
    elems
}

/// Expand one dot-segment into its path elements.
///
/// Disambiguation is purely syntactic: bracket content matching `[0-9]+` is
/// a sequence position, anything else (the empty string included) is a map
/// key. A map keyed by digit-only strings is therefore indistinguishable
/// from a sequence and comes out as one; the namespace grammar carries no
/// type information that could settle it.
fn split_segment(segment: &str, elems: &mut Vec<PathElem>) {
    if !segment.ends_with(']') {
        elems.push(PathElem::Field(segment.to_string()));
        return;
    }

    let name = match segment.find('[') {
        Some(at) => &segment[..at],
        None => segment,
    };

    if let Some(caps) = INDEX_RE.captures(segment) {
        if let Ok(position) = caps[1].parse::<usize>() {
            elems.push(PathElem::Field(name.to_string()));
            elems.push(PathElem::Index(position));
            return;
        }
    }

    let key = KEY_RE
        .captures(segment)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();
    elems.push(PathElem::Field(name.to_string()));
    elems.push(PathElem::Field(key));
}

/// Render parsed elements back into namespace-segment form, without the
/// root type prefix.
///
/// `[Field("bar"), Index(0), Field("baz")]` renders as `bar[0].baz`. Field
/// elements are dot-separated; index elements attach to the preceding field.
pub fn join_path(elems: &[PathElem]) -> String {
    let mut out = String::new();
    for elem in elems {
        if matches!(elem, PathElem::Field(_)) && !out.is_empty() {
            out.push('.');
        }
        out.push_str(&elem.to_string());
    }
    out
}
