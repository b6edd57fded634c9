//! Board identification
//!
//! The device reports its hardware variant as a small integer code under
//! `STATUS:BOARD_ID`. Codes are compared in their text form, exactly as they
//! arrive in the status JSON.

use serde::Serialize;

/// Background applied to the page for boards with a light theme
pub const LIGHT_BACKGROUND: &str = "#fafafa";

/// A known hardware variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardInfo {
    pub code: &'static str,
    pub name: &'static str,
    /// Page uses [`LIGHT_BACKGROUND`] for this board
    pub light_background: bool,
}

const fn board(code: &'static str, name: &'static str, light_background: bool) -> BoardInfo {
    BoardInfo {
        code,
        name,
        light_background,
    }
}

/// All known boards, in code order
pub const BOARDS: &[BoardInfo] = &[
    board("1", "ESP32S3_DEV", false),
    board("2", "ESP32C3_DEV", false),
    board("3", "BlueMark db200", true),
    board("4", "BlueMark db110", true),
    board("5", "JW_TBD", false),
    board("6", "mRo-RID", false),
    board("8", "BlueMark db202mav", true),
    board("9", "BlueMark db203can", true),
    board("10", "BlueMark db210pro", false),
    board("11", "Holybro RemoteID", false),
    board("12", "CUAV RemoteID", false),
    board("25", "Aurelia RID S3", false),
];

/// Look up a board by its code
pub fn board_info(code: &str) -> Option<&'static BoardInfo> {
    BOARDS.iter().find(|board| board.code == code)
}

/// Human-readable label for a board code, `unknown:<code>` if not in the table
pub fn board_label(code: &str) -> String {
    match board_info(code) {
        Some(board) => board.name.to_string(),
        None => format!("unknown:{}", code),
    }
}
