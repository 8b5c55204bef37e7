use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use crate::view::Node;

/// Serializes the tree itself, for hosts that mount it on their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, node: &Node) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(node)?
        } else {
            serde_json::to_string(node)?
        };
        Ok(json)
    }

    fn format_name(&self) -> &'static str {
        "json"
    }
}
