//! Tuning constants
//!
//! Fixed at startup and never reconfigured mid-run. Every field defaults to
//! the values in [`crate::consts`], so a JSON file only needs the overrides.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Physics and playfield tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics (per tick) ===
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Vertical velocity set on a grounded jump (negative is up)
    pub jump_impulse: f32,
    /// Orb impulse = jump_impulse * orb_multiplier
    pub orb_multiplier: f32,
    /// Scroll advance per tick
    pub forward_speed: f32,
    /// Rotation added per airborne tick (degrees)
    pub spin_per_tick: f32,

    // === Playfield ===
    pub ground_y: f32,
    pub course_length: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Player ===
    pub spawn_x: f32,
    pub player_width: f32,
    pub player_height: f32,

    // === Collision ===
    pub hitbox_left: f32,
    pub hitbox_right: f32,
    pub hazard_height: f32,
    pub block_size: f32,
    pub orb_lift: f32,
    pub orb_tolerance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_FORCE,
            orb_multiplier: ORB_MULTIPLIER,
            forward_speed: SPEED,
            spin_per_tick: SPIN_PER_TICK,

            ground_y: GROUND_Y,
            course_length: LEVEL_WIDTH,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            spawn_x: PLAYER_X,
            player_width: PLAYER_SIZE,
            player_height: PLAYER_SIZE,

            hitbox_left: HITBOX_LEFT,
            hitbox_right: HITBOX_RIGHT,
            hazard_height: HAZARD_HEIGHT,
            block_size: BLOCK_SIZE,
            orb_lift: ORB_LIFT,
            orb_tolerance: ORB_TOLERANCE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Vertical velocity applied when an orb is triggered
    #[inline]
    pub fn orb_impulse(&self) -> f32 {
        self.jump_impulse * self.orb_multiplier
    }

    /// Top of the player when standing on the ground
    #[inline]
    pub fn spawn_y(&self) -> f32 {
        self.ground_y - self.player_height
    }

    /// Reject values that would let NaN/inf into the integrator or break
    /// the scroll/progress invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("orb_multiplier", self.orb_multiplier),
            ("forward_speed", self.forward_speed),
            ("spin_per_tick", self.spin_per_tick),
            ("ground_y", self.ground_y),
            ("course_length", self.course_length),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("spawn_x", self.spawn_x),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("hitbox_left", self.hitbox_left),
            ("hitbox_right", self.hitbox_right),
            ("hazard_height", self.hazard_height),
            ("block_size", self.block_size),
            ("orb_lift", self.orb_lift),
            ("orb_tolerance", self.orb_tolerance),
        ];
        if let Some(&(name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(name));
        }

        if self.gravity < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "gravity",
                message: "must be >= 0",
            });
        }
        if self.jump_impulse >= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "jump_impulse",
                message: "must be negative (up)",
            });
        }
        if self.orb_multiplier <= 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "orb_multiplier",
                message: "must be > 1",
            });
        }
        if self.forward_speed < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "forward_speed",
                message: "must be >= 0",
            });
        }
        if self.course_length <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "course_length",
                message: "must be > 0",
            });
        }
        if self.player_width <= 0.0 || self.player_height <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "player_size",
                message: "must be > 0",
            });
        }
        if self.hitbox_right <= self.hitbox_left {
            return Err(ConfigError::InvalidValue {
                field: "hitbox_right",
                message: "must be greater than hitbox_left",
            });
        }
        if self.orb_tolerance <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "orb_tolerance",
                message: "must be > 0",
            });
        }
        Ok(())
    }
}
