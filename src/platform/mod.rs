//! Platform abstraction layer
//!
//! Turns device events (or a scripted player) into writes on the shared
//! [`InputCell`](crate::sim::InputCell).

pub mod autopilot;
pub mod input;

pub use autopilot::{Autopilot, DEFAULT_LEAD};
pub use input::{DeviceEvent, PointerInput};
