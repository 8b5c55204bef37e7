use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub name: String,
    pub exercises: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Part {
    pub fn new(name: impl Into<String>, exercises: u32) -> Self {
        Self {
            name: name.into(),
            exercises,
        }
    }
}

impl Course {
    pub fn new(name: impl Into<String>, parts: Vec<Part>) -> Self {
        Self {
            name: name.into(),
            parts,
        }
    }

    /// The built-in sample course rendered when no course file is given.
    pub fn half_stack() -> Self {
        Self::new(
            "Half Stack application development",
            vec![
                Part::new("Fundamentals of React", 7),
                Part::new("Using props to pass data", 7),
                Part::new("State of a component", 14),
            ],
        )
    }
}
