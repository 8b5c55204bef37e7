pub mod app;
pub mod components;
pub mod node;

pub use app::{app, total_exercises};
pub use node::{Node, Tag};
