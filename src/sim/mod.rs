//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, constants are per tick
//! - Obstacles evaluated in level table order
//! - No rendering or platform dependencies

pub mod collision;
pub mod controller;
pub mod input;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Contact, ResetCause, check_obstacle, resolve_ground, resolve_obstacles};
pub use controller::RunController;
pub use input::InputCell;
pub use level::{Level, Obstacle, ObstacleKind};
pub use state::{Entity, RunState, World};
pub use tick::{TickOutcome, tick};
