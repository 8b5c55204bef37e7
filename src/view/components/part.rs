//! One course part and its exercise count.

use crate::view::node::{Node, Tag};

pub fn part(name: &str, exercises: u32) -> Node {
    tracing::debug!(part = name, exercises, "part");
    Node::element(Tag::P, vec![Node::text(format!("{} {}", name, exercises))])
}
