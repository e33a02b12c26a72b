//! # goo
//!
//! A small declarative language for describing widget trees, and the front end that turns it
//! into a toolkit-agnostic tree:
//!
//! ```text
//! WIDTH = 23
//!
//! label
//!     text = "Hey there"
//!     width = WIDTH
//!     sticky = w
//!     .
//! ```
//!
//! Every AST node keeps the set of tokens it was derived from, so any node can be mapped
//! back to the exact source text that produced it.
//!
//! ## Testing
//!
//! Tree-level tests use the fluent assertions in the [testing module](goo::testing).

pub mod goo;

pub use goo::building::GenericNode;
pub use goo::pipeline::{execute_and_serialize, parse_document, to_tree, GooError};
