//! Scripted player for demos and soak runs
//!
//! Looks at the frame after each tick and presses the shared input the way a
//! person would: jump shortly before a lethal obstacle, tap orbs on the way
//! down. Not guaranteed to finish the stock course.

use crate::renderer::{FrameView, Presenter};
use crate::sim::{InputCell, ObstacleKind};

/// Default look-ahead, in pixels between the player's right edge and the
/// start of an obstacle's hitbox
pub const DEFAULT_LEAD: f32 = 60.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    input: InputCell,
    lead: f32,
    presses: u32,
}

impl Autopilot {
    pub fn new(input: InputCell) -> Self {
        Self {
            input,
            lead: DEFAULT_LEAD,
            presses: 0,
        }
    }

    pub fn with_lead(mut self, lead: f32) -> Self {
        self.lead = lead;
        self
    }

    /// Press transitions issued so far
    pub fn presses(&self) -> u32 {
        self.presses
    }

    /// Whether the input should be held after this frame
    pub fn wants_press(&self, frame: &FrameView<'_>) -> bool {
        let entity = frame.entity();
        let tuning = frame.tuning();

        frame.visible_obstacles().any(|ob| match ob.kind {
            ObstacleKind::Hazard | ObstacleKind::Block => {
                // Blocks resting on the ground can be run through
                let lethal = ob.kind == ObstacleKind::Hazard
                    || entity.bottom() > ob.obstacle.block_top(tuning);
                let gap = ob.x + tuning.hitbox_left - entity.right();
                lethal && entity.grounded && gap > 0.0 && gap < self.lead
            }
            ObstacleKind::Orb => {
                let in_band = entity.left() < ob.x + tuning.hitbox_right
                    && entity.right() > ob.x + tuning.hitbox_left;
                let trigger_y = ob.obstacle.orb_anchor(tuning) - tuning.orb_lift;
                in_band
                    && !entity.grounded
                    && entity.vy > 0.0
                    && (entity.pos.y - trigger_y).abs() < tuning.orb_tolerance
            }
        })
    }
}

impl Presenter for Autopilot {
    fn present(&mut self, frame: &FrameView<'_>) {
        let want = self.wants_press(frame);
        let pressing = self.input.is_pressing();
        if want && !pressing {
            self.input.press();
            self.presses += 1;
        } else if !want && pressing {
            self.input.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;
    use crate::sim::{Level, Obstacle, RunController};

    #[test]
    fn test_jumps_a_single_spike() {
        let level = Level::new(vec![Obstacle::hazard(400.0)]);
        let mut run = RunController::new(Tuning::default(), level).unwrap();
        let mut pilot = Autopilot::new(run.input());

        for _ in 0..250 {
            assert!(!run.step_and_present(&mut pilot).is_reset());
        }
        assert_eq!(pilot.presses(), 1);
        assert!(run.world().run.scroll > 500.0);
    }

    #[test]
    fn test_runs_through_grounded_blocks() {
        let level = Level::new(vec![Obstacle::block(300.0), Obstacle::block(330.0)]);
        let mut run = RunController::new(Tuning::default(), level).unwrap();
        let mut pilot = Autopilot::new(run.input());
        for _ in 0..200 {
            assert!(!run.step_and_present(&mut pilot).is_reset());
        }
        assert_eq!(pilot.presses(), 0);
    }

    #[test]
    fn test_short_lead_hits_the_spike() {
        // A 1 px lead only sees the spike one tick before the band
        let level = Level::new(vec![Obstacle::hazard(400.0)]);
        let mut run = RunController::new(Tuning::default(), level).unwrap();
        let mut pilot = Autopilot::new(run.input()).with_lead(1.0);
        let died = (0..250).any(|_| run.step_and_present(&mut pilot).is_reset());
        assert!(died);
    }

    #[test]
    fn test_idle_without_obstacles() {
        let mut run = RunController::new(Tuning::default(), Level::empty()).unwrap();
        let mut pilot = Autopilot::new(run.input());
        for _ in 0..100 {
            run.step_and_present(&mut pilot);
        }
        assert_eq!(pilot.presses(), 0);
        assert!(!run.world().input.is_pressing());
    }
}
