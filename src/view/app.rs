//! Root view composing the course page.

use crate::domain::model::Course;
use crate::view::components::{header, part, total};
use crate::view::node::{Node, Tag};

/// Sum of exercises over all parts. Widened to `u64` so it cannot overflow.
pub fn total_exercises(course: &Course) -> u64 {
    course
        .parts
        .iter()
        .map(|part| u64::from(part.exercises))
        .sum()
}

/// Builds the page: header, one line per part in order, then the total.
pub fn app(course: &Course) -> Node {
    let mut children = Vec::with_capacity(course.parts.len() + 2);

    children.push(header(&course.name));
    children.extend(course.parts.iter().map(|p| part(&p.name, p.exercises)));
    children.push(total(total_exercises(course)));

    Node::element(Tag::Div, children)
}
