use crate::domain::model::Course;
use crate::domain::ports::CourseSource;
use crate::utils::error::{CourseError, Result};
use std::path::{Path, PathBuf};

/// The built-in sample course.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCourse;

impl CourseSource for SampleCourse {
    fn load(&self) -> Result<Course> {
        Ok(Course::half_stack())
    }

    fn describe(&self) -> String {
        "built-in sample course".to_string()
    }
}

/// A course described in a TOML file.
#[derive(Debug, Clone)]
pub struct TomlCourseFile {
    path: PathBuf,
}

impl TomlCourseFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

/// Parses a course from TOML text. Negative exercise counts fail here.
pub fn course_from_toml_str(content: &str) -> Result<Course> {
    toml::from_str(content).map_err(|e| CourseError::ParseError {
        message: e.to_string(),
    })
}

impl CourseSource for TomlCourseFile {
    fn load(&self) -> Result<Course> {
        let content = std::fs::read_to_string(&self.path)?;
        course_from_toml_str(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Picks the course source for an optional `--course` path.
pub fn source_for(path: Option<&str>) -> Box<dyn CourseSource> {
    match path {
        Some(path) => Box::new(TomlCourseFile::new(path)),
        None => Box::new(SampleCourse),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Part;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_TOML: &str = r#"
name = "Half Stack application development"

[[parts]]
name = "Fundamentals of React"
exercises = 7

[[parts]]
name = "Using props to pass data"
exercises = 7

[[parts]]
name = "State of a component"
exercises = 14
"#;

    #[test]
    fn test_parse_course_toml() {
        let course = course_from_toml_str(SAMPLE_TOML).unwrap();
        assert_eq!(course, Course::half_stack());
    }

    #[test]
    fn test_parts_default_to_empty() {
        let course = course_from_toml_str(r#"name = "Nothing yet""#).unwrap();
        assert_eq!(course, Course::new("Nothing yet", vec![]));
    }

    #[test]
    fn test_negative_exercises_rejected() {
        let content = r#"
name = "Broken"

[[parts]]
name = "Bad"
exercises = -1
"#;
        assert!(matches!(
            course_from_toml_str(content),
            Err(CourseError::ParseError { .. })
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            course_from_toml_str("name = "),
            Err(CourseError::ParseError { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "name = \"Custom\"\n\n[[parts]]\nname = \"Only part\"\nexercises = 3\n"
        )
        .unwrap();

        let source = TomlCourseFile::new(file.path());
        let course = source.load().unwrap();
        assert_eq!(course, Course::new("Custom", vec![Part::new("Only part", 3)]));
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = TomlCourseFile::new("/nonexistent/course.toml");
        assert!(matches!(source.load(), Err(CourseError::IoError(_))));
    }

    #[test]
    fn test_source_for_defaults_to_sample() {
        let source = source_for(None);
        assert_eq!(source.load().unwrap(), Course::half_stack());
    }
}
