pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use text::TextRenderer;

use crate::domain::ports::Renderer;
use crate::utils::error::{CourseError, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Text,
    Json,
}

impl OutputFormat {
    pub const ALL: [&'static str; 3] = ["html", "text", "json"];

    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Html => Box::new(HtmlRenderer::new()),
            OutputFormat::Text => Box::new(TextRenderer::new()),
            OutputFormat::Json => Box::new(JsonRenderer::new(true)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CourseError::UnknownFormat {
                value: s.to_string(),
            }),
        }
    }
}
