use crate::core::{Course, CourseSource, Output, Renderer, Result};
use crate::view::{app, total_exercises};

/// Drives the one-shot render: load, build the tree, serialize, write.
pub struct RenderEngine<S, R, O> {
    source: S,
    renderer: R,
    output: O,
}

impl<S, R, O> RenderEngine<S, R, O>
where
    S: CourseSource,
    R: Renderer,
    O: Output,
{
    pub fn new(source: S, renderer: R, output: O) -> Self {
        Self {
            source,
            renderer,
            output,
        }
    }

    /// Loads the course and renders it without writing anything.
    pub fn render(&self) -> Result<String> {
        tracing::info!("📖 Loading course from {}", self.source.describe());
        let course = self.source.load()?;
        self.render_course(&course)
    }

    pub fn render_course(&self, course: &Course) -> Result<String> {
        tracing::info!(
            "🧩 Rendering '{}' ({} parts, {} exercises) as {}",
            course.name,
            course.parts.len(),
            total_exercises(course),
            self.renderer.format_name()
        );
        let page = app(course);
        self.renderer.render(&page)
    }

    /// Full run; returns where the output was written.
    pub fn run(&self) -> Result<String> {
        let rendered = self.render()?;
        let destination = self.output.write(&rendered)?;
        tracing::info!("📁 Output written to {}", destination);
        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::course_file::SampleCourse;
    use crate::render::TextRenderer;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryOutput {
        written: RefCell<Vec<String>>,
    }

    impl Output for &MemoryOutput {
        fn write(&self, rendered: &str) -> Result<String> {
            self.written.borrow_mut().push(rendered.to_string());
            Ok("memory".to_string())
        }
    }

    struct FixedCourse(Course);

    impl CourseSource for FixedCourse {
        fn load(&self) -> Result<Course> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    #[test]
    fn test_run_writes_rendered_page() {
        let output = MemoryOutput::default();
        let engine = RenderEngine::new(SampleCourse, TextRenderer::new(), &output);

        assert_eq!(engine.run().unwrap(), "memory");

        let written = output.written.borrow();
        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with("Number of exercises 28"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let output = MemoryOutput::default();
        let engine = RenderEngine::new(SampleCourse, TextRenderer::new(), &output);
        assert_eq!(engine.render().unwrap(), engine.render().unwrap());
    }

    #[test]
    fn test_empty_course_renders_zero_total() {
        let output = MemoryOutput::default();
        let engine = RenderEngine::new(
            FixedCourse(Course::new("", vec![])),
            TextRenderer::new(),
            &output,
        );
        assert_eq!(engine.render().unwrap(), "\nNumber of exercises 0");
    }
}
