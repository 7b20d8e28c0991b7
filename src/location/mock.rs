//! Scripted location provider for testing and development

use crate::location::provider::{LocationOptions, LocationProvider, PlatformError, PlatformFix};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Scripted outcome of one platform request
#[derive(Debug, Clone, PartialEq)]
pub enum MockResponse {
    Fix(PlatformFix),
    Error(PlatformError),
    /// Never respond
    Hang,
}

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<MockResponse>,
    last_fix: Option<(PlatformFix, Instant)>,
    requests: u32,
    cache_hits: u32,
}

/// Mock platform provider that replays queued responses
///
/// Fixes are cached the way a browser caches them: a request whose
/// `max_cache_age_ms` covers the last delivered fix gets that fix back
/// without consuming the queue.
#[derive(Debug, Default)]
pub struct MockLocationProvider {
    state: Mutex<MockState>,
    delay: Option<Duration>,
}

impl MockLocationProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every response by `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a response
    pub fn push(&self, response: MockResponse) {
        self.state.lock().responses.push_back(response);
    }

    pub fn queued_response_count(&self) -> usize {
        self.state.lock().responses.len()
    }

    /// Number of requests received, cached or not
    pub fn request_count(&self) -> u32 {
        self.state.lock().requests
    }

    pub fn cache_hit_count(&self) -> u32 {
        self.state.lock().cache_hits
    }

    fn next_response(&self, options: &LocationOptions) -> MockResponse {
        let mut state = self.state.lock();
        state.requests += 1;

        if options.max_cache_age_ms > 0 {
            if let Some((fix, delivered_at)) = state.last_fix {
                if delivered_at.elapsed() <= options.max_cache_age() {
                    state.cache_hits += 1;
                    return MockResponse::Fix(fix);
                }
            }
        }

        let response = state
            .responses
            .pop_front()
            .unwrap_or_else(|| MockResponse::Error(PlatformError::position_unavailable("no scripted response")));

        if let MockResponse::Fix(fix) = response {
            state.last_fix = Some((fix, Instant::now()));
        }
        response
    }
}

#[async_trait]
impl LocationProvider for MockLocationProvider {
    async fn current_position(&self, options: &LocationOptions) -> Result<PlatformFix, PlatformError> {
        let response = self.next_response(options);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match response {
            MockResponse::Fix(fix) => Ok(fix),
            MockResponse::Error(error) => Err(error),
            MockResponse::Hang => std::future::pending().await,
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
