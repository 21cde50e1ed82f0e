//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::FintrackPaths;
pub use settings::{AiSettings, Settings, Theme};
