//! Level table
//!
//! An ordered, read-only list of obstacles along the course.

use serde::{Deserialize, Serialize};

use crate::settings::Tuning;

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Spike sitting on the ground; lethal on contact
    Hazard,
    /// Solid square; lethal on any penetration of its top
    Block,
    /// Yellow orb; a press inside its band gives a boosted jump
    Orb,
}

/// One entry of the level table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Position along the course
    pub x: f32,
    pub kind: ObstacleKind,
    /// Elevation override. `Some(0.0)` is a real value, not "unset".
    #[serde(default, rename = "y", skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f32>,
}

impl Obstacle {
    pub const fn hazard(x: f32) -> Self {
        Self {
            x,
            kind: ObstacleKind::Hazard,
            elevation: None,
        }
    }

    pub const fn block(x: f32) -> Self {
        Self {
            x,
            kind: ObstacleKind::Block,
            elevation: None,
        }
    }

    pub const fn orb(x: f32) -> Self {
        Self {
            x,
            kind: ObstacleKind::Orb,
            elevation: None,
        }
    }

    pub const fn at(mut self, y: f32) -> Self {
        self.elevation = Some(y);
        self
    }

    /// Screen x of this obstacle for a given scroll offset
    #[inline]
    pub fn screen_x(&self, scroll: f32, tuning: &Tuning) -> f32 {
        self.x - scroll + tuning.spawn_x
    }

    /// Lethal surface of a block. Without an override this is the ground
    /// line, so a block resting on the ground never hurts a grounded runner.
    #[inline]
    pub fn block_top(&self, tuning: &Tuning) -> f32 {
        self.elevation.unwrap_or(tuning.ground_y)
    }

    /// Anchor of an orb; the trigger point sits `orb_lift` above it
    #[inline]
    pub fn orb_anchor(&self, tuning: &Tuning) -> f32 {
        self.elevation.unwrap_or(tuning.ground_y)
    }
}

/// Ordered obstacle table, immutable once built
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    obstacles: Vec<Obstacle>,
}

impl Level {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The stock course: spikes, a block pair, floating blocks and two orbs
    pub fn default_course() -> Self {
        Self::new(vec![
            Obstacle::hazard(400.0),
            Obstacle::block(600.0),
            Obstacle::block(630.0),
            // Double spike
            Obstacle::hazard(850.0),
            Obstacle::hazard(880.0),
            Obstacle::orb(1100.0),
            Obstacle::block(1300.0).at(180.0),
            Obstacle::block(1330.0).at(180.0),
            Obstacle::hazard(1550.0),
            Obstacle::orb(1700.0),
            // Triple spike
            Obstacle::hazard(1900.0),
            Obstacle::hazard(1930.0),
            Obstacle::hazard(1960.0),
            Obstacle::block(2200.0).at(150.0),
            Obstacle::hazard(2500.0),
        ])
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Non-decreasing x is recommended but not required
    pub fn is_sorted_by_x(&self) -> bool {
        self.obstacles.windows(2).all(|w| w[0].x <= w[1].x)
    }
}
