// Payload catalogs and request mutation

pub mod catalog;
pub mod injector;

pub use catalog::{sqli_payloads, xss_payloads, PayloadCategory};
pub use injector::{mutate, MutationMode, Target, SYNTHETIC_PARAM};
