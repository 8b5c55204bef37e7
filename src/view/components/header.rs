//! Course heading.

use crate::view::node::{Node, Tag};

pub fn header(course: &str) -> Node {
    tracing::debug!(course, "header");
    Node::element(Tag::H1, vec![Node::text(course)])
}
