//! Orb Dash - A one-button side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, collisions, run controller)
//! - `renderer`: Presenter interface, frame snapshots and obstacle geometry
//! - `platform`: Device input translation
//! - `settings`: Data-driven tuning constants

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World physics (per tick, not per second)
    pub const GRAVITY: f32 = 0.28;
    pub const JUMP_FORCE: f32 = -5.5;
    /// Orb impulse is the jump impulse scaled by this
    pub const ORB_MULTIPLIER: f32 = 1.2;
    pub const SPEED: f32 = 3.5;
    /// Air spin in degrees per tick
    pub const SPIN_PER_TICK: f32 = 4.0;

    /// Playfield
    pub const GROUND_Y: f32 = 250.0;
    pub const LEVEL_WIDTH: f32 = 3000.0;
    pub const VIEWPORT_WIDTH: f32 = 600.0;
    pub const VIEWPORT_HEIGHT: f32 = 300.0;

    /// Player spawn (x is a fixed screen offset)
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_SIZE: f32 = 30.0;

    /// Hitbox band is narrower than the 30 px art on purpose
    pub const HITBOX_LEFT: f32 = 5.0;
    pub const HITBOX_RIGHT: f32 = 25.0;
    /// Spikes kill anything whose bottom dips into this strip above ground
    pub const HAZARD_HEIGHT: f32 = 20.0;
    pub const BLOCK_SIZE: f32 = 30.0;
    /// Orb trigger point sits this far above the orb's anchor
    pub const ORB_LIFT: f32 = 60.0;
    pub const ORB_TOLERANCE: f32 = 40.0;
    pub const ORB_RADIUS: f32 = 12.0;

    /// Off-screen obstacles within this margin are still drawn
    pub const CULL_MARGIN: f32 = 50.0;
}

/// Snap an angle in degrees to the nearest multiple of 90, wrapped into [0, 360)
#[inline]
pub fn snap_rotation(degrees: f32) -> f32 {
    ((degrees / 90.0).round() * 90.0).rem_euclid(360.0)
}
