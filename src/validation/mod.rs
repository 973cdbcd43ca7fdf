// Evidence classifiers
//
// Pure decisions over fetched responses. The time-based probe is the only
// one that issues its own request.

pub mod baseline;
pub mod diff;
pub mod reflection;
pub mod sql_error;
pub mod time_sqli;

pub use baseline::Baseline;
pub use diff::{diff, divergence_context, DIVERGENCE_THRESHOLD};
pub use reflection::find_reflection;
pub use sql_error::{detect_sql_error, error_context, DbmsSignature};
pub use time_sqli::{is_delayed, TimeBasedSqlEngine, TimeSqlResult};
