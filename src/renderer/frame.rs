//! Per-tick snapshot handed to presenters

use glam::Vec2;

use crate::consts::CULL_MARGIN;
use crate::settings::Tuning;
use crate::sim::{Entity, Level, Obstacle, ObstacleKind, World};

/// An obstacle placed in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenObstacle {
    /// Index into the level table
    pub index: usize,
    pub kind: ObstacleKind,
    /// Left edge on screen
    pub x: f32,
    pub obstacle: Obstacle,
}

/// Read-only view of the world after a tick
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    world: &'a World,
    level: &'a Level,
    tuning: &'a Tuning,
}

impl<'a> FrameView<'a> {
    pub fn new(world: &'a World, level: &'a Level, tuning: &'a Tuning) -> Self {
        Self {
            world,
            level,
            tuning,
        }
    }

    pub fn entity(&self) -> &'a Entity {
        &self.world.entity
    }

    pub fn scroll(&self) -> f32 {
        self.world.run.scroll
    }

    pub fn ticks(&self) -> u64 {
        self.world.run.ticks
    }

    /// Completion fraction in [0, 1]
    pub fn progress(&self) -> f32 {
        self.world.progress(self.tuning)
    }

    pub fn level(&self) -> &'a Level {
        self.level
    }

    pub fn tuning(&self) -> &'a Tuning {
        self.tuning
    }

    /// Player rotation pivot and angle in radians
    pub fn player_transform(&self) -> (Vec2, f32) {
        let entity = self.entity();
        (entity.center(), entity.rotation.to_radians())
    }

    /// Obstacles within the viewport plus the cull margin, in table order
    pub fn visible_obstacles(&self) -> impl Iterator<Item = ScreenObstacle> + 'a {
        let scroll = self.scroll();
        let tuning = self.tuning;
        let level = self.level;
        let max_x = tuning.viewport_width + CULL_MARGIN;

        level
            .obstacles()
            .iter()
            .enumerate()
            .filter_map(move |(index, obstacle)| {
                let x = obstacle.screen_x(scroll, tuning);
                (-CULL_MARGIN..=max_x).contains(&x).then_some(ScreenObstacle {
                    index,
                    kind: obstacle.kind,
                    x,
                    obstacle: *obstacle,
                })
            })
    }
}
