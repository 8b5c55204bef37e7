pub mod engine;

pub use crate::domain::model::Course;
pub use crate::domain::ports::{CourseSource, Output, Renderer};
pub use crate::utils::error::Result;
