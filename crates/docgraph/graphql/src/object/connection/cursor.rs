use base64::engine::general_purpose;
use base64::Engine as _;

use crate::constants::CURSOR_PREFIX;

/// Opaque cursor of the edge at `offset` within a connection.
pub fn encode(offset: usize) -> String {
    let cursor = format!("{CURSOR_PREFIX}:{offset}");
    general_purpose::STANDARD.encode(cursor.as_bytes())
}
