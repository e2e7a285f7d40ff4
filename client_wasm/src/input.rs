//! Pointer coordinate conversion

use game_core::Court;
use web_sys::HtmlCanvasElement;

/// Convert viewport coordinates into court coordinates, undoing the canvas
/// offset and any CSS scaling
pub fn to_court(canvas: &HtmlCanvasElement, court: Court, client_x: f64, client_y: f64) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let scale_x = if rect.width() > 0.0 {
        court.width / rect.width()
    } else {
        1.0
    };
    let scale_y = if rect.height() > 0.0 {
        court.height / rect.height()
    } else {
        1.0
    };
    (
        (client_x - rect.left()) * scale_x,
        (client_y - rect.top()) * scale_y,
    )
}
