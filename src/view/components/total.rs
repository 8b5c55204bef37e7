//! Total exercise count line.

use crate::view::node::{Node, Tag};

/// Takes an already computed total; the caller does the summing.
pub fn total(exercises: u64) -> Node {
    tracing::debug!(exercises, "total");
    Node::element(
        Tag::P,
        vec![Node::text(format!("Number of exercises {}", exercises))],
    )
}
