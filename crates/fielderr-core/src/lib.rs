//! Fielderr Core - Validation-failure trees
//!
//! This crate converts the flat, namespace-addressed failure records
//! produced by a field validation engine into a nested tree that mirrors
//! the shape of the validated value: structs and map fields become keyed
//! nodes while slices become indexed nodes, with each failure as a leaf.
//! The tree supports structured traversal, a stable string rendering,
//! direct JSON serialization, and a generic translation pass that swaps
//! every leaf for a caller-produced form while preserving the shape.
//!
//! # Main Components
//!
//! - **Path Parsing**: `Signup.addresses[2].street` → ordered path elements
//! - **Tree Building**: fold flat records into one [`Validation`] value
//! - **Navigation**: typed [`Validation::get`] traversal with typed errors
//! - **Translation**: map leaves through a caller function, shape intact
//!
//! # Example
//!
//! ```
//! use fielderr_core::{build_tree, FlatError};
//! use serde_json::json;
//!
//! let tree = build_tree([
//!     FlatError {
//!         namespace: "Signup.name".to_string(),
//!         tag: "required".to_string(),
//!         field: "name".to_string(),
//!         param: String::new(),
//!         value: json!(null),
//!     },
//!     FlatError {
//!         namespace: "Signup.pets[0].name".to_string(),
//!         tag: "min".to_string(),
//!         field: "name".to_string(),
//!         param: "4".to_string(),
//!         value: json!("x"),
//!     },
//! ]);
//!
//! assert_eq!(
//!     tree.to_string(),
//!     r#"{"name": "required", "pets": [{"name": "min"}]}"#
//! );
//!
//! let messages = tree.translate(&|err| format!("rule '{}' failed", err.tag));
//! assert_eq!(
//!     serde_json::to_value(&messages).unwrap(),
//!     json!({"name": "rule 'required' failed", "pets": [{"name": "rule 'min' failed"}]})
//! );
//! ```

pub mod builder;
pub mod error;
pub mod path;
pub mod translate;
pub mod tree;


// Re-export main types for convenience
pub use builder::{build_tree, FlatError, TreeBuilder};
pub use error::{Error, NodeKind, Result};
pub use path::{join_path, split_namespace, PathElem};
pub use translate::Translated;
pub use tree::{FieldError, Key, Validation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
