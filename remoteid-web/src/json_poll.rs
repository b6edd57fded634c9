//! JSON polling
//!
//! Wraps the polling loop so callbacks receive parsed JSON. A body that does
//! not parse keeps the chain going.

use crate::config::PollConfig;
use crate::controller::PageController;
use crate::page::Page;
use crate::poll::{ajax_poll, CancellationToken, PollStats, Timer};
use crate::transport::Transport;
use crate::types::Result;
use serde_json::Value;

/// Turn a JSON callback into a text callback
///
/// Malformed JSON returns `true` without calling `callback`.
pub fn json_callback<F>(mut callback: F) -> impl FnMut(&str) -> bool
where
    F: FnMut(&Value) -> bool,
{
    move |text: &str| match serde_json::from_str::<Value>(text) {
        Ok(json) => callback(&json),
        Err(e) => {
            log::debug!("Ignoring malformed JSON ({})", e);
            true
        }
    }
}

/// Poll a JSON endpoint, calling `callback` with each parsed body
pub fn ajax_json_poll<T, F, S>(
    transport: &T,
    url: &str,
    callback: F,
    config: &PollConfig,
    timer: &mut S,
    token: &CancellationToken,
) -> Result<PollStats>
where
    T: Transport + ?Sized,
    F: FnMut(&Value) -> bool,
    S: Timer + ?Sized,
{
    ajax_poll(transport, url, json_callback(callback), config, timer, token)
}

/// Poll a JSON endpoint and fill the controller's page markup from it
pub fn ajax_json_poll_fill<T, P, S>(
    transport: &T,
    url: &str,
    controller: &mut PageController<P>,
    config: &PollConfig,
    timer: &mut S,
    token: &CancellationToken,
) -> Result<PollStats>
where
    T: Transport + ?Sized,
    P: Page,
    S: Timer + ?Sized,
{
    ajax_json_poll(
        transport,
        url,
        |json| {
            controller.fill_json_html(json);
            true
        },
        config,
        timer,
        token,
    )
}
