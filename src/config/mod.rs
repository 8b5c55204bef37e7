pub mod course_file;
pub mod output;

use crate::render::OutputFormat;
use crate::utils::error::{CourseError, Result};
use crate::utils::validation::{validate_optional_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "courseinfo"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Render a course with its parts and total exercise count")
)]
pub struct CliConfig {
    /// TOML course file; the built-in sample course is used when omitted
    #[cfg_attr(feature = "cli", arg(long))]
    pub course: Option<String>,

    /// Output format: html, text or json
    #[cfg_attr(feature = "cli", arg(long, default_value = "text"))]
    pub format: String,

    /// Write the rendered page to this file instead of stdout
    #[cfg_attr(feature = "cli", arg(long))]
    pub output: Option<String>,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub verbose: bool,

    /// Emit logs as JSON
    #[cfg_attr(feature = "cli", arg(long))]
    pub log_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            course: None,
            format: "text".to_string(),
            output: None,
            verbose: false,
            log_json: false,
        }
    }
}

impl CliConfig {
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_optional_path("course", self.course.as_deref())?;
        validate_optional_path("output", self.output.as_deref())?;

        if self.output_format().is_err() {
            return Err(CourseError::ValidationError {
                field: "format".to_string(),
                value: self.format.clone(),
                reason: format!("Valid formats: {}", OutputFormat::ALL.join(", ")),
            });
        }

        Ok(())
    }
}
