//! The output tree produced by view components.
//!
//! Components build `Node`s and never format for a particular surface;
//! serialization to markup or text happens in [`crate::render`].

use serde::Serialize;

/// Element tags the course page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Div,
    H1,
    P,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::H1 => "h1",
            Tag::P => "p",
        }
    }

    /// Tags whose content forms a single displayed line.
    pub fn is_line(&self) -> bool {
        matches!(self, Tag::H1 | Tag::P)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element { tag: Tag, children: Vec<Node> },
    Text { text: String },
}

impl Node {
    pub fn element(tag: Tag, children: Vec<Node>) -> Self {
        Node::Element { tag, children }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}
