use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use crate::view::Node;

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => escape_into(text, out),
        Node::Element { tag, children } => {
            out.push('<');
            out.push_str(tag.as_str());
            out.push('>');
            for child in children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(tag.as_str());
            out.push('>');
        }
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, node: &Node) -> Result<String> {
        let mut out = String::new();
        write_node(node, &mut out);
        Ok(out)
    }

    fn format_name(&self) -> &'static str {
        "html"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Course;
    use crate::view::{app, Tag};

    #[test]
    fn test_render_sample_page() {
        let html = HtmlRenderer::new().render(&app(&Course::half_stack())).unwrap();
        assert_eq!(
            html,
            "<div><h1>Half Stack application development</h1>\
             <p>Fundamentals of React 7</p>\
             <p>Using props to pass data 7</p>\
             <p>State of a component 14</p>\
             <p>Number of exercises 28</p></div>"
        );
    }

    #[test]
    fn test_escapes_text() {
        let node = Node::element(Tag::P, vec![Node::text(r#"<b>"Tom" & 'Jerry'</b>"#)]);
        assert_eq!(
            HtmlRenderer::new().render(&node).unwrap(),
            "<p>&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;</p>"
        );
    }
}
