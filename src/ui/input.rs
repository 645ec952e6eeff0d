//! Canvas-Input: Maus-Events der Zeichenfläche → AppIntent.

use crate::app::AppIntent;
use crate::core::CanvasRect;

/// Sammelt Pointer-Events der Canvas-Response.
///
/// Meldet jedes Frame das aktuelle Canvas-Rechteck; Down/Move/Up der
/// Primärtaste werden als Press/Move/Release-Absichten durchgereicht.
pub fn collect_canvas_events(response: &egui::Response) -> Vec<AppIntent> {
    let rect = response.rect;
    let mut events = vec![AppIntent::CanvasResized {
        rect: CanvasRect::new(rect.min.x, rect.min.y, rect.width(), rect.height()),
    }];

    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(AppIntent::CanvasPointerPressed {
                screen_x: pos.x,
                screen_y: pos.y,
            });
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(AppIntent::CanvasPointerMoved {
                screen_x: pos.x,
                screen_y: pos.y,
            });
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        events.push(AppIntent::CanvasPointerReleased);
    }

    events
}
