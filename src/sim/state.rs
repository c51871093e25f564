//! Simulation state
//!
//! Everything a tick mutates lives in [`World`]. A reset rewrites it in place
//! from [`Tuning`]; nothing is reallocated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::InputCell;
use crate::settings::Tuning;

/// The controlled actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner. `x` is a fixed screen offset, only `y` moves.
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative is up)
    pub vy: f32,
    /// Degrees; spins in the air, snapped to 90 on landing
    pub rotation: f32,
    pub grounded: bool,
}

impl Entity {
    /// Standing on the ground at the spawn column
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.spawn_x, tuning.spawn_y()),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            vy: 0.0,
            rotation: 0.0,
            grounded: true,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point, used as the rotation pivot when drawing
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vy.is_finite() && self.rotation.is_finite()
    }
}

/// Per-run progress through the course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    /// Distance travelled. Never decreases within a run.
    pub scroll: f32,
    /// Ticks since the run started
    pub ticks: u64,
}

/// Complete mutable simulation context
#[derive(Debug, Clone)]
pub struct World {
    pub entity: Entity,
    pub run: RunState,
    /// Shared with the input adapter; not part of the reset
    pub input: InputCell,
}

impl World {
    pub fn new(tuning: &Tuning) -> Self {
        Self::with_input(tuning, InputCell::new())
    }

    /// Build a world around an existing input cell
    pub fn with_input(tuning: &Tuning, input: InputCell) -> Self {
        Self {
            entity: Entity::spawn(tuning),
            run: RunState::default(),
            input,
        }
    }

    /// Put entity and run state back to spawn values. Idempotent.
    ///
    /// The input cell is left alone: it reflects the device, and a held
    /// press should still be held after the restart.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.entity = Entity::spawn(tuning);
        self.run = RunState::default();
    }

    /// Fraction of the course covered, clamped to [0, 1]
    pub fn progress(&self, tuning: &Tuning) -> f32 {
        (self.run.scroll / tuning.course_length).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_rests_on_ground() {
        let tuning = Tuning::default();
        let entity = Entity::spawn(&tuning);
        assert_eq!(entity.bottom(), tuning.ground_y);
        assert_eq!(entity.left(), 100.0);
        assert_eq!(entity.right(), 130.0);
        assert_eq!(entity.center(), Vec2::new(115.0, 235.0));
        assert!(entity.grounded);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let tuning = Tuning::default();
        let mut world = World::new(&tuning);
        world.entity.pos.y = 120.0;
        world.entity.vy = -3.0;
        world.entity.rotation = 37.0;
        world.run.scroll = 999.0;
        world.run.ticks = 42;

        world.reset(&tuning);
        let (once_entity, once_run) = (world.entity, world.run.clone());
        world.reset(&tuning);
        assert_eq!(world.entity, once_entity);
        assert_eq!(world.run, once_run);
        assert_eq!(world.run.scroll, 0.0);
    }

    #[test]
    fn test_reset_keeps_held_input() {
        let tuning = Tuning::default();
        let mut world = World::new(&tuning);
        world.input.press();
        world.reset(&tuning);
        assert!(world.input.is_pressing());
    }

    #[test]
    fn test_progress_clamped() {
        let tuning = Tuning::default();
        let mut world = World::new(&tuning);
        world.run.scroll = 1500.0;
        assert_eq!(world.progress(&tuning), 0.5);
        world.run.scroll = 3100.0;
        assert_eq!(world.progress(&tuning), 1.0);
    }
}
