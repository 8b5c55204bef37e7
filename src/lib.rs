pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;
pub mod view;

pub use config::course_file::{SampleCourse, TomlCourseFile};
pub use config::output::{FileOutput, StdoutOutput};
pub use config::CliConfig;
pub use core::engine::RenderEngine;
pub use domain::model::{Course, Part};
pub use render::{HtmlRenderer, JsonRenderer, OutputFormat, TextRenderer};
pub use utils::error::{CourseError, Result};
pub use view::{app, Node, Tag};
