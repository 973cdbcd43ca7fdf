pub mod client;
pub mod response;

pub use client::{HttpClient, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use response::{FetchResult, HttpResponse};
