//! Collision detection and response
//!
//! Ground plane plus a narrow per-obstacle band test. Everything is checked in
//! the player's screen frame: an obstacle sits at `x - scroll + spawn_x`.

use super::level::{Level, Obstacle, ObstacleKind};
use super::state::{Entity, World};
use crate::settings::Tuning;
use crate::snap_rotation;

/// Why a run was restarted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    /// Touched a spike
    Hazard { index: usize },
    /// Pushed into a block
    Block { index: usize },
    /// Scrolled past the end of the course
    CourseComplete,
    /// Integrator produced NaN/inf
    NonFinite,
}

/// What an obstacle did to the player this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    Lethal(ResetCause),
    /// Orb fired; carries the new vertical velocity
    Boost(f32),
}

/// Clamp to the ground line, or spin if airborne. Returns true on ground.
pub fn resolve_ground(entity: &mut Entity, tuning: &Tuning) -> bool {
    if entity.bottom() >= tuning.ground_y {
        entity.pos.y = tuning.ground_y - entity.size.y;
        entity.vy = 0.0;
        entity.grounded = true;
        entity.rotation = snap_rotation(entity.rotation);
    } else {
        entity.grounded = false;
        entity.rotation += tuning.spin_per_tick;
    }
    entity.grounded
}

/// Horizontal overlap against the forgiving 20 px band of an obstacle
#[inline]
pub fn overlaps_band(entity: &Entity, obstacle_screen_x: f32, tuning: &Tuning) -> bool {
    entity.left() < obstacle_screen_x + tuning.hitbox_right
        && entity.right() > obstacle_screen_x + tuning.hitbox_left
}

/// Test a single obstacle. `pressing` is the flag as this tick sees it.
pub fn check_obstacle(
    entity: &Entity,
    obstacle: &Obstacle,
    index: usize,
    scroll: f32,
    pressing: bool,
    tuning: &Tuning,
) -> Option<Contact> {
    let screen_x = obstacle.screen_x(scroll, tuning);
    if !overlaps_band(entity, screen_x, tuning) {
        return None;
    }

    match obstacle.kind {
        ObstacleKind::Hazard => (entity.bottom() > tuning.ground_y - tuning.hazard_height)
            .then_some(Contact::Lethal(ResetCause::Hazard { index })),
        ObstacleKind::Block => (entity.bottom() > obstacle.block_top(tuning))
            .then_some(Contact::Lethal(ResetCause::Block { index })),
        ObstacleKind::Orb => {
            let trigger_y = obstacle.orb_anchor(tuning) - tuning.orb_lift;
            (pressing && (entity.pos.y - trigger_y).abs() < tuning.orb_tolerance)
                .then(|| Contact::Boost(tuning.orb_impulse()))
        }
    }
}

/// Run every obstacle in table order.
///
/// Orbs clear the shared input cell so one hold can't chain boosts. The
/// first lethal contact stops the pass and is returned; the caller resets.
pub fn resolve_obstacles(world: &mut World, level: &Level, tuning: &Tuning) -> Option<ResetCause> {
    let mut pressing = world.input.is_pressing();

    for (index, obstacle) in level.obstacles().iter().enumerate() {
        match check_obstacle(
            &world.entity,
            obstacle,
            index,
            world.run.scroll,
            pressing,
            tuning,
        ) {
            Some(Contact::Lethal(cause)) => return Some(cause),
            Some(Contact::Boost(vy)) => {
                world.entity.vy = vy;
                world.input.consume();
                pressing = false;
            }
            None => {}
        }
    }
    None
}
