pub mod crawler;

pub use crawler::{crawl, Crawler, DEFAULT_MAX_PAGES};
