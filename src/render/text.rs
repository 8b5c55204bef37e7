use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use crate::view::Node;

/// Plain-text surface: one line per heading or paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn lines(&self, node: &Node) -> Vec<String> {
        let mut lines = Vec::new();
        collect_lines(node, &mut lines);
        lines
    }
}

/// Line breaks inside text become spaces so each block stays on one line.
fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

fn collect_lines(node: &Node, lines: &mut Vec<String>) {
    match node {
        Node::Element { tag, .. } if tag.is_line() => {
            lines.push(single_line(&node.text_content()))
        }
        Node::Text { text } => lines.push(single_line(text)),
        Node::Element { children, .. } => {
            for child in children {
                collect_lines(child, lines);
            }
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, node: &Node) -> Result<String> {
        Ok(self.lines(node).join("\n"))
    }

    fn format_name(&self) -> &'static str {
        "text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Course, Part};
    use crate::view::app;

    #[test]
    fn test_render_sample_lines() {
        let text = TextRenderer::new().render(&app(&Course::half_stack())).unwrap();
        assert_eq!(
            text,
            "Half Stack application development\n\
             Fundamentals of React 7\n\
             Using props to pass data 7\n\
             State of a component 14\n\
             Number of exercises 28"
        );
    }

    #[test]
    fn test_part_lines_follow_course_order() {
        let course = Course::new(
            "Ordering",
            vec![Part::new("z", 1), Part::new("a", 2), Part::new("m", 3)],
        );
        let lines = TextRenderer::new().lines(&app(&course));
        assert_eq!(lines[1..4], ["z 1", "a 2", "m 3"]);
        assert_eq!(lines[4], "Number of exercises 6");
    }

    #[test]
    fn test_line_breaks_in_names_stay_on_one_line() {
        let course = Course::new(
            "Two\r\nlines",
            vec![Part::new("a\nb", 1), Part::new("c\rd", 2)],
        );
        let lines = TextRenderer::new().lines(&app(&course));
        assert_eq!(
            lines,
            vec!["Two lines", "a b 1", "c d 2", "Number of exercises 3"]
        );
    }
}
