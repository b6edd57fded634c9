//! RemoteID Web Interface Client
//!
//! Helpers for talking to the embedded web interface of a RemoteID device:
//! cross-origin requests against its status endpoints, polling of JSON/text
//! endpoints, and filling a page from JSON key/value pairs.
//!
//! # Architecture
//!
//! - [`request`] builds cross-origin requests; [`transport`] carries them
//! - [`poll`] runs self-rescheduling poll chains with a pluggable [`Timer`]
//!   and a [`CancellationToken`]
//! - [`json_poll`] parses bodies as JSON and tolerates malformed ones
//! - [`page`] models the DOM by element id; [`fill`] writes JSON into it
//! - [`controller`] keeps a page and its session state together
//!
//! # Example Usage
//!
//! ```no_run
//! use remoteid_web::{
//!     ajax_json_poll_fill, CancellationToken, Document, HttpTransport, PageController,
//!     PollConfig, ThreadTimer,
//! };
//!
//! let transport = HttpTransport::new().unwrap();
//! let page = Document::with_elements(["STATUS:VERSION", "STATUS:BOARD"]);
//! let mut controller = PageController::new(page);
//!
//! let stats = ajax_json_poll_fill(
//!     &transport,
//!     "http://192.168.4.1/ajax/status.json",
//!     &mut controller,
//!     &PollConfig::new().with_max_polls(10),
//!     &mut ThreadTimer,
//!     &CancellationToken::new(),
//! )
//! .unwrap();
//!
//! println!("{} polls, board: {:?}", stats.loads, controller.page().element("STATUS:BOARD"));
//! ```

// Public modules
pub mod board;
pub mod config;
pub mod controller;
pub mod fetch;
pub mod fill;
pub mod json_poll;
pub mod page;
pub mod poll;
pub mod request;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use board::{board_info, board_label, BoardInfo, BOARDS};
pub use config::{PollConfig, DEFAULT_STATUS_URL};
pub use controller::PageController;
pub use fetch::{ajax_get_callback, ajax_get_callback_binary};
pub use fill::{page_fill_json_html, page_fill_json_value, set_message_color, SessionState};
pub use json_poll::{ajax_json_poll, ajax_json_poll_fill, json_callback};
pub use page::{Document, Element, Page};
pub use poll::{
    ajax_poll, CancellationToken, PollChain, PollStats, PollStep, StopReason, ThreadTimer, Timer,
};
pub use request::{create_cors_request, CorsCapability, CorsMode, CorsRequest};
pub use transport::{HttpTransport, Transport};
pub use types::{
    HttpMethod, Response, ResponseType, Result, Timestamp, TransportError, WebError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: a fresh controller starts with an untouched page
        let controller = PageController::new(Document::new());
        assert_eq!(controller.page().mutations(), 0);
        assert!(!controller.session().board_label_resolved());
    }
}
