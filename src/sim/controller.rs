//! Run controller
//!
//! Owns the world, level and tuning, feeds wall-clock time into whole fixed
//! ticks and notifies the presenter after each one. Resets are invisible
//! restarts; there is no paused or game-over phase.

use super::collision::ResetCause;
use super::input::InputCell;
use super::level::Level;
use super::state::World;
use super::tick::{TickOutcome, tick};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::error::ConfigError;
use crate::renderer::{FrameView, Presenter};
use crate::settings::Tuning;

/// Longest frame we try to catch up on (seconds)
const MAX_FRAME_TIME: f32 = 0.1;

pub struct RunController {
    world: World,
    level: Level,
    tuning: Tuning,
    accumulator: f32,
    /// Runs started since construction, including the first
    attempts: u32,
}

impl RunController {
    pub fn new(tuning: Tuning, level: Level) -> Result<Self, ConfigError> {
        tuning.validate()?;
        if !level.is_sorted_by_x() {
            log::warn!("Level obstacles are not sorted by x; traversal order may look odd");
        }
        log::info!(
            "Run controller ready: {} obstacles, course length {}",
            level.len(),
            tuning.course_length
        );
        Ok(Self {
            world: World::new(&tuning),
            level,
            tuning,
            accumulator: 0.0,
            attempts: 1,
        })
    }

    /// Handle for the input adapter. All handles share one flag.
    pub fn input(&self) -> InputCell {
        self.world.input.clone()
    }

    /// Run exactly one physics tick
    pub fn step(&mut self) -> TickOutcome {
        let outcome = tick(&mut self.world, &self.level, &self.tuning);
        if let TickOutcome::Reset(cause) = outcome {
            self.attempts += 1;
            match cause {
                ResetCause::CourseComplete => {
                    log::info!("Course complete, restarting (attempt {})", self.attempts)
                }
                ResetCause::NonFinite => {
                    log::warn!("Non-finite player state, restarting (attempt {})", self.attempts)
                }
                ResetCause::Hazard { index } | ResetCause::Block { index } => {
                    log::debug!(
                        "Hit obstacle #{} ({:?}), restarting (attempt {})",
                        index,
                        cause,
                        self.attempts
                    )
                }
            }
        }
        outcome
    }

    /// One tick followed by a render notification
    pub fn step_and_present<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> TickOutcome {
        let outcome = self.step();
        presenter.present(&self.frame_view());
        outcome
    }

    /// Feed elapsed wall-clock seconds; runs as many whole ticks as fit.
    ///
    /// Non-finite or non-positive time runs nothing. Returns ticks run.
    pub fn advance<P: Presenter + ?Sized>(&mut self, elapsed: f32, presenter: &mut P) -> u32 {
        if !elapsed.is_finite() || elapsed <= 0.0 {
            log::warn!("Ignoring invalid frame time: {}", elapsed);
            return 0;
        }
        self.accumulator += elapsed.min(MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step_and_present(presenter);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// Back to spawn. Safe to call at any time, repeatedly.
    pub fn reset(&mut self) {
        self.world.reset(&self.tuning);
        self.accumulator = 0.0;
    }

    /// Course completion in [0, 1]
    pub fn progress(&self) -> f32 {
        self.world.progress(&self.tuning)
    }

    pub fn frame_view(&self) -> FrameView<'_> {
        FrameView::new(&self.world, &self.level, &self.tuning)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}
