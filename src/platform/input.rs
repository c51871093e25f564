//! Device input adapter
//!
//! Mouse and touch both map to the single press/hold action.

use crate::sim::InputCell;

/// Raw pointer events we care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceEvent {
    MouseDown,
    MouseUp,
    TouchStart,
    TouchEnd,
}

impl DeviceEvent {
    /// Map a DOM event type string
    pub fn from_dom(event_type: &str) -> Option<Self> {
        match event_type {
            "mousedown" => Some(DeviceEvent::MouseDown),
            "mouseup" => Some(DeviceEvent::MouseUp),
            "touchstart" => Some(DeviceEvent::TouchStart),
            "touchend" | "touchcancel" => Some(DeviceEvent::TouchEnd),
            _ => None,
        }
    }

    pub fn is_press(&self) -> bool {
        matches!(self, DeviceEvent::MouseDown | DeviceEvent::TouchStart)
    }
}

/// Writes device events into the shared pressing flag.
///
/// Only ever writes on an event, so a sim-side clear (orb) stays cleared
/// until the next press.
#[derive(Debug, Clone)]
pub struct PointerInput {
    cell: InputCell,
}

impl PointerInput {
    pub fn new(cell: InputCell) -> Self {
        Self { cell }
    }

    pub fn handle(&self, event: DeviceEvent) {
        if event.is_press() {
            self.cell.press();
        } else {
            self.cell.release();
        }
    }
}
