//! Page controller
//!
//! Owns a page together with the state that must survive between poll
//! callbacks, so fills from successive polls share one session.

use crate::fill::{page_fill_json_html, page_fill_json_value, set_message_color, SessionState};
use crate::page::Page;
use serde_json::Value;

pub struct PageController<P: Page> {
    page: P,
    session: SessionState,
}

impl<P: Page> PageController<P> {
    /// Start a session for a freshly loaded page
    pub fn new(page: P) -> Self {
        Self {
            page,
            session: SessionState::new(),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn into_page(self) -> P {
        self.page
    }

    pub fn fill_json_value(&mut self, json: &Value) -> usize {
        page_fill_json_value(&mut self.page, json)
    }

    pub fn fill_json_html(&mut self, json: &Value) -> usize {
        page_fill_json_html(&mut self.page, &mut self.session, json)
    }

    pub fn set_message_color(&mut self, id: &str, color: &str, message: &str) -> bool {
        set_message_color(&mut self.page, id, color, message)
    }
}
