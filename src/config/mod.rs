//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::FindualPaths;
pub use settings::Settings;
