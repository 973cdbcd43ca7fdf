pub mod json;
pub mod model;
pub mod text;

pub use model::{DetectionResult, Evidence, Finding, PageReport, ScanReport};
