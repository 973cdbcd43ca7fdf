// Reflected XSS detection
//
// One payload hit per parameter: the first reflected payload is recorded
// and the remaining payloads for that parameter are skipped.

pub mod engine;

pub use engine::detect_xss;
