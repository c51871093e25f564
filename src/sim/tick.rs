//! Fixed timestep simulation tick
//!
//! One call advances the world by exactly one tick. Step order matters:
//! ground and obstacle checks see the post-gravity position.

use super::collision::{ResetCause, resolve_ground, resolve_obstacles};
use super::level::Level;
use super::state::World;
use crate::settings::Tuning;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// The world was put back to spawn during this tick
    Reset(ResetCause),
}

impl TickOutcome {
    pub fn is_reset(&self) -> bool {
        matches!(self, TickOutcome::Reset(_))
    }
}

/// Advance the world by one fixed tick
pub fn tick(world: &mut World, level: &Level, tuning: &Tuning) -> TickOutcome {
    let entity = &mut world.entity;

    // Gravity
    entity.vy += tuning.gravity;
    entity.pos.y += entity.vy;

    world.run.scroll += tuning.forward_speed;
    world.run.ticks += 1;

    if !entity.is_finite() {
        world.reset(tuning);
        return TickOutcome::Reset(ResetCause::NonFinite);
    }

    let grounded = resolve_ground(entity, tuning);

    // Jump; grounded is only recomputed next tick
    if grounded && world.input.is_pressing() {
        entity.vy = tuning.jump_impulse;
    }

    if let Some(cause) = resolve_obstacles(world, level, tuning) {
        world.reset(tuning);
        return TickOutcome::Reset(cause);
    }

    if world.run.scroll > tuning.course_length {
        world.reset(tuning);
        return TickOutcome::Reset(ResetCause::CourseComplete);
    }

    TickOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::Obstacle;
    use crate::sim::state::Entity;

    fn setup() -> (Tuning, World) {
        let tuning = Tuning::default();
        let world = World::new(&tuning);
        (tuning, world)
    }

    #[test]
    fn test_idle_on_ground_stays_put() {
        let (tuning, mut world) = setup();
        let level = Level::empty();
        for _ in 0..10 {
            assert_eq!(tick(&mut world, &level, &tuning), TickOutcome::Continue);
            assert!(world.entity.grounded);
            assert_eq!(world.entity.pos.y, tuning.spawn_y());
            assert_eq!(world.entity.vy, 0.0);
        }
        assert_eq!(world.run.scroll, 35.0);
        assert_eq!(world.run.ticks, 10);
    }

    #[test]
    fn test_jump_sets_impulse_then_leaves_ground() {
        let (tuning, mut world) = setup();
        let level = Level::empty();
        world.input.press();

        tick(&mut world, &level, &tuning);
        // Still on the ground line this tick, but launched
        assert!(world.entity.grounded);
        assert_eq!(world.entity.vy, tuning.jump_impulse);
        assert_eq!(world.entity.pos.y, tuning.spawn_y());

        world.input.release();
        tick(&mut world, &level, &tuning);
        assert!(!world.entity.grounded);
        assert_eq!(world.entity.vy, tuning.jump_impulse + tuning.gravity);
        assert!(world.entity.pos.y < tuning.spawn_y());
        assert_eq!(world.entity.rotation, tuning.spin_per_tick);
    }

    #[test]
    fn test_holding_rejumps_on_landing() {
        let (tuning, mut world) = setup();
        let level = Level::empty();
        world.input.press();

        let mut jumps = 0;
        for _ in 0..200 {
            let prev_vy = world.entity.vy;
            tick(&mut world, &level, &tuning);
            if world.entity.vy == tuning.jump_impulse && prev_vy != tuning.jump_impulse {
                jumps += 1;
            }
        }
        assert!(jumps >= 4, "held press should keep jumping, got {jumps}");
    }

    #[test]
    fn test_falls_to_exact_clamp_tick() {
        let (tuning, mut world) = setup();
        let level = Level::empty();
        // 20 px above the ground: 0.28 * (1 + 2 + ... + n) first reaches 20 at n = 12
        world.entity.pos.y = tuning.spawn_y() - 20.0;
        world.entity.grounded = false;

        for n in 1..=11 {
            tick(&mut world, &level, &tuning);
            assert!(!world.entity.grounded, "landed early at tick {n}");
        }
        tick(&mut world, &level, &tuning);
        assert!(world.entity.grounded);
        assert_eq!(world.entity.pos.y, tuning.spawn_y());
        assert_eq!(world.entity.vy, 0.0);
        assert_eq!(world.entity.rotation % 90.0, 0.0);
    }

    #[test]
    fn test_spawn_clamps_on_first_tick() {
        let (tuning, mut world) = setup();
        tick(&mut world, &Level::empty(), &tuning);
        assert_eq!(world.entity.pos.y, 220.0);
        assert_eq!(world.entity.vy, 0.0);
    }

    #[test]
    fn test_hazard_resets_same_tick() {
        let (tuning, mut world) = setup();
        // After one tick scroll is 3.5, spike screen x is 106.5
        let level = Level::new(vec![Obstacle::hazard(10.0)]);
        let outcome = tick(&mut world, &level, &tuning);
        assert_eq!(outcome, TickOutcome::Reset(ResetCause::Hazard { index: 0 }));
        assert_eq!(world.entity, Entity::spawn(&tuning));
        assert_eq!(world.run.scroll, 0.0);
        assert_eq!(world.run.ticks, 0);
    }

    #[test]
    fn test_runner_passes_grounded_block() {
        let (tuning, mut world) = setup();
        let level = Level::new(vec![Obstacle::block(10.0)]);
        // Band overlaps for the first dozen ticks
        for _ in 0..20 {
            assert_eq!(tick(&mut world, &level, &tuning), TickOutcome::Continue);
            assert!(world.entity.grounded);
        }
        assert_eq!(world.run.scroll, 70.0);
    }

    #[test]
    fn test_floating_block_kills_grounded_runner() {
        let (tuning, mut world) = setup();
        let level = Level::new(vec![Obstacle::block(10.0).at(180.0)]);
        assert_eq!(
            tick(&mut world, &level, &tuning),
            TickOutcome::Reset(ResetCause::Block { index: 0 })
        );
    }

    #[test]
    fn test_course_complete_on_first_tick_past_end() {
        let (tuning, mut world) = setup();
        let level = Level::empty();
        // 857 * 3.5 = 2999.5, 858 * 3.5 = 3003
        for _ in 0..857 {
            assert_eq!(tick(&mut world, &level, &tuning), TickOutcome::Continue);
        }
        assert_eq!(world.run.scroll, 2999.5);
        assert_eq!(
            tick(&mut world, &level, &tuning),
            TickOutcome::Reset(ResetCause::CourseComplete)
        );
        assert_eq!(world.run.scroll, 0.0);
    }

    #[test]
    fn test_orb_boost_through_tick() {
        let (tuning, mut world) = setup();
        // Orb overlaps on the first tick; grounded press jumps, then the orb overrides
        let level = Level::new(vec![Obstacle::orb(0.0)]);
        world.input.press();
        assert_eq!(tick(&mut world, &level, &tuning), TickOutcome::Continue);
        assert_eq!(world.entity.vy, tuning.jump_impulse * 1.2);
        assert!(!world.input.is_pressing());
    }

    #[test]
    fn test_non_finite_state_resets() {
        let (tuning, mut world) = setup();
        world.entity.vy = f32::NAN;
        let outcome = tick(&mut world, &Level::empty(), &tuning);
        assert_eq!(outcome, TickOutcome::Reset(ResetCause::NonFinite));
        assert!(world.entity.is_finite());
        assert_eq!(world.entity, Entity::spawn(&tuning));
    }
}
