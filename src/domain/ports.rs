use crate::domain::model::Course;
use crate::utils::error::Result;
use crate::view::Node;

/// Where a course comes from: the built-in sample or a file.
pub trait CourseSource {
    fn load(&self) -> Result<Course>;
    fn describe(&self) -> String;
}

/// Serializes a view tree for a display surface.
pub trait Renderer {
    fn render(&self, node: &Node) -> Result<String>;
    fn format_name(&self) -> &'static str;
}

/// Receives the rendered page.
pub trait Output {
    fn write(&self, rendered: &str) -> Result<String>;
}

impl<T: CourseSource + ?Sized> CourseSource for Box<T> {
    fn load(&self) -> Result<Course> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: Renderer + ?Sized> Renderer for Box<T> {
    fn render(&self, node: &Node) -> Result<String> {
        (**self).render(node)
    }

    fn format_name(&self) -> &'static str {
        (**self).format_name()
    }
}

impl<T: Output + ?Sized> Output for Box<T> {
    fn write(&self, rendered: &str) -> Result<String> {
        (**self).write(rendered)
    }
}
