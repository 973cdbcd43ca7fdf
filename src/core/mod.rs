pub mod context;
pub mod engine;
pub mod scope;

pub use context::{Context, OutputFormat, ScanOptions};
pub use engine::Engine;
pub use scope::Scope;
