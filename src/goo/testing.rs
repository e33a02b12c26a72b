//! Testing utilities for built trees
//!
//! Asserting on a [GenericNode](crate::goo::building::GenericNode) tree by hand means indexing
//! into children and attribute maps at every level. [assert_tree] wraps that in a fluent API:
//!
//! ```rust-example
//! use crate::goo::testing::assert_tree;
//!
//! assert_tree(&nodes)
//!     .node_count(1)
//!     .node(0, |frame| {
//!         frame
//!             .tag("frame")
//!             .attr("name", "top")
//!             .child_count(1)
//!             .child(0, |label| {
//!                 label.tag("label").grid("sticky", "w");
//!             });
//!     });
//! ```
//!
//! Failure messages carry the path to the node (`nodes[0].children[1]`), so a broken
//! assertion deep in a tree says where it is.
//!
//! [factories] builds tokens with explicit ids and spans for scanner-level tests.

mod testing_assertions;
mod testing_factories;

pub use testing_assertions::{assert_tree, NodeAssertion, TreeAssertion};

pub mod factories {
    pub use super::testing_factories::*;
}
