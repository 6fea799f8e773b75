pub mod config;
pub mod display;
pub mod workflow;

pub use config::Options;
pub use workflow::{run, Workflow};
