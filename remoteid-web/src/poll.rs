//! Polling loop
//!
//! A poll chain repeatedly GETs one URL and hands every loaded body to a
//! callback. The callback decides whether the chain goes on:
//!
//! - callback returns `true`: wait the refresh interval, poll again
//! - callback returns `false`: stop, no further requests
//! - network error or timeout: wait the refresh interval, poll again
//!
//! There is no backoff and no retry limit. Waiting goes through a [`Timer`]
//! so chains can be driven without real sleeps, and a [`CancellationToken`]
//! is checked before every request.

use crate::config::PollConfig;
use crate::request::create_cors_request;
use crate::transport::Transport;
use crate::types::{HttpMethod, Result, TransportError, WebError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Waits between two polls of a chain
pub trait Timer {
    fn wait(&mut self, delay: Duration);
}

/// Timer that blocks the current thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadTimer;

impl Timer for ThreadTimer {
    fn wait(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Shared flag used to stop a running poll chain
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; the chain stops before its next request
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Why a poll chain ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The callback returned `false`
    CallbackDeclined,
    /// The configured number of loads was reached
    MaxPolls,
    /// The cancellation token fired
    Cancelled,
}

/// Outcome of a single poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStep {
    /// Schedule another poll after the refresh interval
    Continue,
    Stop(StopReason),
}

/// Counters for a poll chain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollStats {
    /// Requests sent
    pub requests: u64,
    /// Requests that finished loading (any HTTP status)
    pub loads: u64,
    pub network_errors: u64,
    pub timeouts: u64,
    /// Set once the chain has ended
    pub stop_reason: Option<StopReason>,
}

/// A poll chain against one URL
pub struct PollChain<'t, T: Transport + ?Sized> {
    transport: &'t T,
    url: String,
    config: PollConfig,
    stats: PollStats,
}

impl<'t, T: Transport + ?Sized> PollChain<'t, T> {
    pub fn new(transport: &'t T, url: impl Into<String>, config: PollConfig) -> Self {
        Self {
            transport,
            url: url.into(),
            config,
            stats: PollStats::default(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    pub fn stats(&self) -> &PollStats {
        &self.stats
    }

    /// Send one request and run the callback on its body
    ///
    /// Transport failures are counted and answered with
    /// [`PollStep::Continue`]; they never reach the callback.
    pub fn poll_once<F>(&mut self, callback: &mut F) -> Result<PollStep>
    where
        F: FnMut(&str) -> bool,
    {
        let request = create_cors_request(self.transport.capability(), HttpMethod::Get, &self.url)
            .ok_or_else(|| WebError::CorsUnsupported {
                url: self.url.clone(),
            })?
            .with_timeout(self.config.timeout());

        self.stats.requests += 1;
        match self.transport.send(&request) {
            Ok(response) => {
                self.stats.loads += 1;
                if !response.is_success() {
                    log::debug!("Poll of {} loaded with status {}", self.url, response.status);
                }
                if !callback(&response.text()) {
                    log::debug!("Poll of {} stopped by callback", self.url);
                    return Ok(PollStep::Stop(StopReason::CallbackDeclined));
                }
                if let Some(max) = self.config.max_polls {
                    if self.stats.loads >= max {
                        log::debug!("Poll of {} reached {} loads", self.url, max);
                        return Ok(PollStep::Stop(StopReason::MaxPolls));
                    }
                }
                Ok(PollStep::Continue)
            }
            Err(TransportError::Timeout) => {
                self.stats.timeouts += 1;
                log::debug!("Poll of {} timed out, retrying", self.url);
                Ok(PollStep::Continue)
            }
            Err(TransportError::Network(e)) => {
                self.stats.network_errors += 1;
                log::debug!("Poll of {} failed ({}), retrying", self.url, e);
                Ok(PollStep::Continue)
            }
        }
    }

    /// Poll until the callback declines, `max_polls` is reached or the token
    /// is cancelled
    pub fn run<F, S>(
        &mut self,
        mut callback: F,
        timer: &mut S,
        token: &CancellationToken,
    ) -> Result<PollStats>
    where
        F: FnMut(&str) -> bool,
        S: Timer + ?Sized,
    {
        let reason = loop {
            if token.is_cancelled() {
                break StopReason::Cancelled;
            }
            match self.poll_once(&mut callback)? {
                PollStep::Continue => timer.wait(self.config.refresh_interval()),
                PollStep::Stop(reason) => break reason,
            }
        };

        self.stats.stop_reason = Some(reason);
        log::debug!(
            "Poll chain for {} ended ({:?}) after {} requests",
            self.url,
            reason,
            self.stats.requests
        );
        Ok(self.stats.clone())
    }
}

/// Poll `url`, calling `callback` with each response text
pub fn ajax_poll<T, F, S>(
    transport: &T,
    url: &str,
    callback: F,
    config: &PollConfig,
    timer: &mut S,
    token: &CancellationToken,
) -> Result<PollStats>
where
    T: Transport + ?Sized,
    F: FnMut(&str) -> bool,
    S: Timer + ?Sized,
{
    config.validate()?;
    PollChain::new(transport, url, config.clone()).run(callback, timer, token)
}
