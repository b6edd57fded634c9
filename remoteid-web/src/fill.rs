//! Fill page elements from JSON
//!
//! Keys of a JSON object are element ids; values are written either as form
//! values or as inner markup. Keys without a matching element are skipped.

use crate::board::{board_info, board_label, LIGHT_BACKGROUND};
use crate::page::Page;
use serde_json::Value;

/// Key carrying the board code in the status JSON
pub const BOARD_ID_KEY: &str = "STATUS:BOARD_ID";

/// Element receiving the resolved board name
pub const BOARD_LABEL_ID: &str = "STATUS:BOARD";

/// Per-page state carried across poll callbacks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    board_label_resolved: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the board label has been written for this page
    pub fn board_label_resolved(&self) -> bool {
        self.board_label_resolved
    }
}

/// Text written to the page for a JSON value
///
/// Strings are used verbatim, `null` becomes empty, integral floats drop
/// their fraction (`3.0` is `3`), everything else is rendered as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            // `+ 0.0` folds -0.0 into 0
            Some(f) => format!("{}", f + 0.0),
            None => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Set the value of every element whose id is a key of `json`
///
/// Returns the number of elements updated.
pub fn page_fill_json_value<P: Page + ?Sized>(page: &mut P, json: &Value) -> usize {
    let Some(object) = json.as_object() else {
        return 0;
    };

    let mut filled = 0;
    for (id, value) in object {
        if page.set_value(id, &value_text(value)) {
            log::trace!("value {} = {}", id, value);
            filled += 1;
        }
    }
    filled
}

/// Set the inner markup of every element whose id is a key of `json`
///
/// A `STATUS:BOARD_ID` key without an element of its own resolves the board
/// name into `STATUS:BOARD`, at most once per session.
pub fn page_fill_json_html<P: Page + ?Sized>(
    page: &mut P,
    session: &mut SessionState,
    json: &Value,
) -> usize {
    let Some(object) = json.as_object() else {
        return 0;
    };

    let mut filled = 0;
    for (id, value) in object {
        let text = value_text(value);
        if page.set_inner_html(id, &text) {
            log::trace!("html {} = {}", id, text);
            filled += 1;
        } else if id == BOARD_ID_KEY && !session.board_label_resolved {
            apply_board_label(page, &text);
            session.board_label_resolved = true;
        }
    }
    filled
}

fn apply_board_label<P: Page + ?Sized>(page: &mut P, code: &str) {
    let label = board_label(code);
    log::debug!("Board code {} resolved to {}", code, label);

    if !page.set_inner_text(BOARD_LABEL_ID, &label) {
        log::warn!("Page has no {} element for board label {}", BOARD_LABEL_ID, label);
        return;
    }
    if board_info(code).is_some_and(|board| board.light_background) {
        page.set_background(LIGHT_BACKGROUND);
    }
}

/// Write a bold, colored message into an element
///
/// Returns `false` and leaves the page untouched when the element is missing.
pub fn set_message_color<P: Page + ?Sized>(page: &mut P, id: &str, color: &str, message: &str) -> bool {
    page.set_inner_html(id, &format!("<b style=\"color:{}\">{}</b>", color, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Document;
    use serde_json::json;

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("abc")), "abc");
        assert_eq!(value_text(&json!(3)), "3");
        assert_eq!(value_text(&json!(1.5)), "1.5");
        assert_eq!(value_text(&json!(3.0)), "3");
        assert_eq!(value_text(&json!(-0.0)), "0");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&json!(null)), "");
        assert_eq!(value_text(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_fill_value_only_matching_ids() {
        let mut doc = Document::with_elements(["PARAM:UAS_ID", "PARAM:LOCK_LEVEL"]);
        let json = json!({
            "PARAM:UAS_ID": "ABC123",
            "PARAM:LOCK_LEVEL": 0,
            "PARAM:UNKNOWN": "ignored",
        });

        assert_eq!(page_fill_json_value(&mut doc, &json), 2);
        assert_eq!(doc.element("PARAM:UAS_ID").unwrap().value, "ABC123");
        assert_eq!(doc.element("PARAM:LOCK_LEVEL").unwrap().value, "0");
        assert_eq!(doc.element("PARAM:UAS_ID").unwrap().inner_html, "");
        assert!(doc.element("PARAM:UNKNOWN").is_none());
    }

    #[test]
    fn test_fill_non_object_is_noop() {
        let mut doc = Document::with_elements(["0"]);
        let mut session = SessionState::new();
        assert_eq!(page_fill_json_value(&mut doc, &json!(["x"])), 0);
        assert_eq!(page_fill_json_html(&mut doc, &mut session, &json!("x")), 0);
        assert_eq!(doc.mutations(), 0);
    }

    #[test]
    fn test_fill_html() {
        let mut doc = Document::with_elements(["STATUS:VERSION", "STATUS:UPTIME"]);
        let mut session = SessionState::new();
        let json = json!({"STATUS:VERSION": "<b>1.3</b>", "STATUS:UPTIME": 42});

        assert_eq!(page_fill_json_html(&mut doc, &mut session, &json), 2);
        assert_eq!(doc.element("STATUS:VERSION").unwrap().inner_html, "<b>1.3</b>");
        assert_eq!(doc.element("STATUS:UPTIME").unwrap().inner_html, "42");
        assert!(!session.board_label_resolved());
    }

    #[test]
    fn test_board_label_light_background() {
        let mut doc = Document::with_elements([BOARD_LABEL_ID]);
        let mut session = SessionState::new();
        page_fill_json_html(&mut doc, &mut session, &json!({BOARD_ID_KEY: "3"}));

        assert_eq!(doc.element(BOARD_LABEL_ID).unwrap().inner_html, "BlueMark db200");
        assert_eq!(doc.background(), Some(LIGHT_BACKGROUND));
        assert!(session.board_label_resolved());
    }

    #[test]
    fn test_board_label_numeric_code() {
        let mut doc = Document::with_elements([BOARD_LABEL_ID]);
        let mut session = SessionState::new();
        page_fill_json_html(&mut doc, &mut session, &json!({BOARD_ID_KEY: 11}));

        assert_eq!(doc.element(BOARD_LABEL_ID).unwrap().inner_html, "Holybro RemoteID");
        assert_eq!(doc.background(), None);
    }

    #[test]
    fn test_board_label_integral_float_code() {
        let mut doc = Document::with_elements([BOARD_LABEL_ID]);
        let mut session = SessionState::new();
        page_fill_json_html(&mut doc, &mut session, &json!({BOARD_ID_KEY: 3.0}));

        assert_eq!(doc.element(BOARD_LABEL_ID).unwrap().inner_html, "BlueMark db200");
        assert_eq!(doc.background(), Some(LIGHT_BACKGROUND));
    }

    #[test]
    fn test_board_label_unknown_code() {
        let mut doc = Document::with_elements([BOARD_LABEL_ID]);
        let mut session = SessionState::new();
        page_fill_json_html(&mut doc, &mut session, &json!({BOARD_ID_KEY: "42"}));
        assert_eq!(doc.element(BOARD_LABEL_ID).unwrap().inner_html, "unknown:42");
    }

    #[test]
    fn test_board_label_resolved_once() {
        let mut doc = Document::with_elements([BOARD_LABEL_ID]);
        let mut session = SessionState::new();
        page_fill_json_html(&mut doc, &mut session, &json!({BOARD_ID_KEY: "1"}));
        let after_first = doc.mutations();

        page_fill_json_html(&mut doc, &mut session, &json!({BOARD_ID_KEY: "4"}));
        page_fill_json_html(&mut doc, &mut session, &json!({BOARD_ID_KEY: "1"}));

        assert_eq!(doc.element(BOARD_LABEL_ID).unwrap().inner_html, "ESP32S3_DEV");
        assert_eq!(doc.mutations(), after_first);
        assert_eq!(doc.background(), None);
    }

    #[test]
    fn test_board_id_element_takes_precedence() {
        let mut doc = Document::with_elements([BOARD_ID_KEY, BOARD_LABEL_ID]);
        let mut session = SessionState::new();
        page_fill_json_html(&mut doc, &mut session, &json!({BOARD_ID_KEY: "3"}));

        assert_eq!(doc.element(BOARD_ID_KEY).unwrap().inner_html, "3");
        assert_eq!(doc.element(BOARD_LABEL_ID).unwrap().inner_html, "");
        assert!(!session.board_label_resolved());
    }

    #[test]
    fn test_board_label_without_target_element() {
        let mut doc = Document::new();
        let mut session = SessionState::new();
        page_fill_json_html(&mut doc, &mut session, &json!({BOARD_ID_KEY: "8"}));

        assert_eq!(doc.background(), None);
        assert_eq!(doc.mutations(), 0);
        assert!(session.board_label_resolved());
    }

    #[test]
    fn test_set_message_color() {
        let mut doc = Document::with_elements(["message"]);
        assert!(set_message_color(&mut doc, "message", "green", "Upload OK"));
        assert_eq!(
            doc.element("message").unwrap().inner_html,
            "<b style=\"color:green\">Upload OK</b>"
        );
    }

    #[test]
    fn test_set_message_color_missing_id() {
        let mut doc = Document::with_elements(["message"]);
        assert!(!set_message_color(&mut doc, "status", "red", "failed"));
        assert_eq!(doc.mutations(), 0);
        assert_eq!(doc.element("message").unwrap().inner_html, "");
    }
}
