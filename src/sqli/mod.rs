//! SQL injection detection
//!
//! Error-signature and response-divergence checks over every selected
//! payload, with an optional time-based blind fallback per parameter.

pub mod engine;

pub use engine::{detect_sqli, SqliScanner};
