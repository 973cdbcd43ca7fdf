pub mod cli;
pub mod core;
pub mod http;
pub mod payload;
pub mod reporting;
pub mod scanner;
pub mod sqli;
pub mod validation;
pub mod xss;
