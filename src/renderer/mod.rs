//! Presentation layer
//!
//! The sim never draws. After every tick the run controller hands a
//! [`FrameView`] to a [`Presenter`], which owns all drawing and HUD work.

pub mod frame;
pub mod shapes;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use frame::{FrameView, ScreenObstacle};
pub use shapes::{Shape, obstacle_shape};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPresenter;

/// Receives one frame per simulation tick
pub trait Presenter {
    fn present(&mut self, frame: &FrameView<'_>);
}

/// Fan a frame out to two presenters, left first
impl<A: Presenter, B: Presenter> Presenter for (A, B) {
    fn present(&mut self, frame: &FrameView<'_>) {
        self.0.present(frame);
        self.1.present(frame);
    }
}

/// Headless presenter: tracks run statistics and logs progress milestones
#[derive(Debug, Default, Clone)]
pub struct TracePresenter {
    /// Frames presented
    pub frames: u64,
    /// Best progress reached in any run
    pub best_progress: f32,
    /// Most obstacles on screen in a single frame
    pub max_visible: usize,
    /// Last logged tenth of the course
    last_decile: u32,
}

impl Presenter for TracePresenter {
    fn present(&mut self, frame: &FrameView<'_>) {
        self.frames += 1;

        let visible = frame.visible_obstacles().count();
        self.max_visible = self.max_visible.max(visible);

        let progress = frame.progress();
        self.best_progress = self.best_progress.max(progress);

        let decile = (progress * 10.0) as u32;
        if decile != self.last_decile {
            if decile > self.last_decile {
                log::debug!(
                    "{}% at tick {} (y={:.1}, {} obstacles on screen)",
                    decile * 10,
                    frame.ticks(),
                    frame.entity().pos.y,
                    visible
                );
            }
            self.last_decile = decile;
        }
        log::trace!(
            "tick {} scroll {:.1} y {:.2} vy {:.2} rot {:.0}",
            frame.ticks(),
            frame.scroll(),
            frame.entity().pos.y,
            frame.entity().vy,
            frame.entity().rotation
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;
    use crate::sim::{Level, World};

    #[test]
    fn test_trace_presenter_tracks_best() {
        let tuning = Tuning::default();
        let level = Level::default_course();
        let mut world = World::new(&tuning);
        let mut presenter = TracePresenter::default();

        world.run.scroll = 1500.0;
        presenter.present(&FrameView::new(&world, &level, &tuning));
        world.run.scroll = 300.0;
        presenter.present(&FrameView::new(&world, &level, &tuning));

        assert_eq!(presenter.frames, 2);
        assert_eq!(presenter.best_progress, 0.5);
        assert!(presenter.max_visible > 0);
    }
}
